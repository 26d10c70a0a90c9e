//! Immutable per-record system parameters.

use serde::{Deserialize, Serialize};
use units::{Length, Time};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::config::DisplayScale;
use crate::habitable_zone::{HabitableZone, HabitableZoneStatus};
use crate::orbit::{clamp_eccentricity, OrbitGeometry};
use crate::record::FieldSource;

/// Catalog field names (lower-case; upper-case variants are accepted too).
pub mod fields {
    pub const PLANET_NAME: &str = "pl_name";
    pub const HOST_NAME: &str = "hostname";
    /// Stellar radius, R☉
    pub const STELLAR_RADIUS: &str = "st_rad";
    /// Stellar luminosity, log10(L/L☉)
    pub const STELLAR_LOG_LUMINOSITY: &str = "st_lum";
    /// Orbit semi-major axis, AU
    pub const SEMI_MAJOR_AXIS: &str = "pl_orbsmax";
    pub const ECCENTRICITY: &str = "pl_orbeccen";
    /// Planet radius, R⊕
    pub const PLANET_RADIUS: &str = "pl_rade";
    /// Orbital period, days
    pub const ORBITAL_PERIOD: &str = "pl_orbper";
}

pub const DEFAULT_PLANET_NAME: &str = "Planet";
pub const DEFAULT_HOST_NAME: &str = "Star";
pub const DEFAULT_STELLAR_RADIUS_SOLAR: f64 = 1.0;
pub const DEFAULT_PLANET_RADIUS_EARTH: f64 = 1.0;
pub const DEFAULT_SEMI_MAJOR_AXIS_AU: f64 = 1.0;
pub const DEFAULT_ORBITAL_PERIOD_DAYS: f64 = 365.0;

/// Everything derived from one catalog record, computed once.
///
/// Physical inputs are kept next to their display-scaled counterparts so a
/// renderer can label bodies without undoing the scaling. Serialized keys are
/// the renderer's field names (`plName`, `habitableZoneInnerAu`, ...); fields
/// without a renderer name use plain camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SystemParameters {
    #[serde(rename = "plName")]
    pub planet_name: String,
    pub host_name: String,

    /// Stellar radius in R☉
    pub stellar_radius_solar: f64,
    /// Stellar luminosity in L☉, when the record carries a representable one
    pub stellar_luminosity: Option<f64>,
    /// Drawn star radius (AU), floored by the display scale
    pub star_radius_display: Length,

    /// Planet radius in R⊕
    pub planet_radius_earth: f64,
    /// Drawn planet radius (AU), floored by the display scale
    pub planet_radius_display: Length,

    #[serde(rename = "orbitSemiMajorAxisAu")]
    pub semi_major_axis: Length,
    /// Eccentricity in [0, 0.99]
    pub eccentricity: f64,
    /// False when the record had no usable eccentricity and 0 was assumed
    pub eccentricity_known: bool,
    #[serde(rename = "orbitalPeriodDays")]
    pub orbital_period: Time,

    /// Inner habitable-zone edge
    #[serde(rename = "habitableZoneInnerAu")]
    pub habitable_zone_inner: Length,
    /// Outer habitable-zone edge
    #[serde(rename = "habitableZoneOuterAu")]
    pub habitable_zone_outer: Length,
    pub habitable_zone_status: HabitableZoneStatus,
}

impl SystemParameters {
    /// Derive parameters from a record. Never fails: every missing or
    /// unusable field takes its documented default.
    pub fn from_record<S>(record: &S, scale: &DisplayScale) -> Self
    where
        S: FieldSource + ?Sized,
    {
        let planet_name = record.text_or(fields::PLANET_NAME, DEFAULT_PLANET_NAME);
        let host_name = record.text_or(fields::HOST_NAME, DEFAULT_HOST_NAME);

        let stellar_radius_solar =
            positive_or(record, fields::STELLAR_RADIUS, DEFAULT_STELLAR_RADIUS_SOLAR);
        let planet_radius_earth =
            positive_or(record, fields::PLANET_RADIUS, DEFAULT_PLANET_RADIUS_EARTH);
        let semi_major_axis = Length::from_au(positive_or(
            record,
            fields::SEMI_MAJOR_AXIS,
            DEFAULT_SEMI_MAJOR_AXIS_AU,
        ));
        let orbital_period = Time::from_days(positive_or(
            record,
            fields::ORBITAL_PERIOD,
            DEFAULT_ORBITAL_PERIOD_DAYS,
        ));

        let raw_eccentricity = record.number(fields::ECCENTRICITY);
        if raw_eccentricity.is_none() {
            tracing::debug!(
                field = fields::ECCENTRICITY,
                "eccentricity unknown, assuming circular orbit"
            );
        }
        let eccentricity_known = raw_eccentricity.is_some();
        let eccentricity = clamp_eccentricity(raw_eccentricity.unwrap_or(0.0));

        let log_luminosity = record.number(fields::STELLAR_LOG_LUMINOSITY);
        if log_luminosity.is_none() {
            tracing::debug!(
                field = fields::STELLAR_LOG_LUMINOSITY,
                "luminosity unknown, using Sun-like habitable zone"
            );
        }
        let habitable_zone = HabitableZone::from_log_luminosity(log_luminosity);
        let habitable_zone_status = habitable_zone.classify(semi_major_axis);

        let stellar_luminosity = log_luminosity
            .map(|log_l| 10f64.powf(log_l))
            .filter(|l| l.is_finite() && *l > 0.0);
        if let (Some(log_l), None) = (log_luminosity, stellar_luminosity) {
            tracing::debug!(
                field = fields::STELLAR_LOG_LUMINOSITY,
                log_l,
                "luminosity not representable, dropping it"
            );
        }

        Self {
            planet_name,
            host_name,
            stellar_radius_solar,
            stellar_luminosity,
            star_radius_display: scale.star_radius(stellar_radius_solar),
            planet_radius_earth,
            planet_radius_display: scale.planet_radius(planet_radius_earth),
            semi_major_axis,
            eccentricity,
            eccentricity_known,
            orbital_period,
            habitable_zone_inner: habitable_zone.inner_edge,
            habitable_zone_outer: habitable_zone.outer_edge,
            habitable_zone_status,
        }
    }

    /// The habitable-zone band these parameters were classified against.
    pub fn habitable_zone(&self) -> HabitableZone {
        HabitableZone {
            inner_edge: self.habitable_zone_inner,
            outer_edge: self.habitable_zone_outer,
        }
    }

    /// Orbit geometry captured from these parameters.
    pub fn orbit(&self) -> OrbitGeometry {
        OrbitGeometry::new(self.semi_major_axis, self.eccentricity)
    }
}

/// Positive numeric field, or `fallback` when absent, non-numeric or ≤ 0.
fn positive_or<S>(record: &S, key: &'static str, fallback: f64) -> f64
where
    S: FieldSource + ?Sized,
{
    match record.number(key) {
        Some(value) if value > 0.0 => value,
        Some(value) => {
            tracing::debug!(field = key, value, fallback, "non-positive value, using default");
            fallback
        }
        None => {
            tracing::debug!(field = key, fallback, "field missing, using default");
            fallback
        }
    }
}
