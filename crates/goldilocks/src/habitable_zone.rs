//! Habitable-zone (Goldilocks) band and orbit classification.

use std::fmt;

use serde::{Deserialize, Serialize};
use units::Length;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Inner edge for a 1 L☉ star (AU), runaway greenhouse limit
pub const SUN_LIKE_INNER_AU: f64 = 0.75;
/// Outer edge for a 1 L☉ star (AU), maximum greenhouse limit
pub const SUN_LIKE_OUTER_AU: f64 = 1.77;

/// Habitable zone boundaries in AU.
///
/// Equal stellar flux falls at a distance proportional to √L, so both edges
/// scale from their Sun-like values by √(L/L☉).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HabitableZone {
    pub inner_edge: Length,
    pub outer_edge: Length,
}

impl HabitableZone {
    /// The band around a Sun-like star, used whenever luminosity is unknown.
    pub const SUN_LIKE: Self = Self {
        inner_edge: Length::from_au(SUN_LIKE_INNER_AU),
        outer_edge: Length::from_au(SUN_LIKE_OUTER_AU),
    };

    /// Band for a star of the given luminosity in L☉.
    ///
    /// A zero luminosity collapses both edges to zero.
    pub fn from_luminosity(luminosity: f64) -> Self {
        let sqrt_l = luminosity.sqrt();

        Self {
            inner_edge: Length::from_au(SUN_LIKE_INNER_AU * sqrt_l),
            outer_edge: Length::from_au(SUN_LIKE_OUTER_AU * sqrt_l),
        }
    }

    /// Band for a catalog log-luminosity, `log10(L/L☉)`.
    ///
    /// Missing or non-finite values fall back to [`HabitableZone::SUN_LIKE`],
    /// as do luminosities whose edges cannot be represented as distinct,
    /// positive, finite distances.
    ///
    /// # Examples
    ///
    /// ```
    /// use goldilocks::HabitableZone;
    ///
    /// assert_eq!(HabitableZone::from_log_luminosity(None), HabitableZone::SUN_LIKE);
    ///
    /// let bright = HabitableZone::from_log_luminosity(Some(2.0));
    /// assert!((bright.inner_edge.to_au() - 7.5).abs() < 1e-12);
    /// ```
    pub fn from_log_luminosity(log_luminosity: Option<f64>) -> Self {
        log_luminosity
            .and_then(Self::from_representable_log_luminosity)
            .unwrap_or(Self::SUN_LIKE)
    }

    fn from_representable_log_luminosity(log_luminosity: f64) -> Option<Self> {
        // √L = 10^(log L / 2), which stays finite far beyond where L itself overflows
        let sqrt_l = 10f64.powf(log_luminosity / 2.0);
        let zone = Self {
            inner_edge: Length::from_au(SUN_LIKE_INNER_AU * sqrt_l),
            outer_edge: Length::from_au(SUN_LIKE_OUTER_AU * sqrt_l),
        };
        let inner = zone.inner_edge.to_au();
        let outer = zone.outer_edge.to_au();
        (inner > 0.0 && outer.is_finite() && inner < outer).then_some(zone)
    }

    /// Whether `distance` lies in the closed interval [inner, outer].
    pub fn contains(&self, distance: Length) -> bool {
        self.inner_edge <= distance && distance <= self.outer_edge
    }

    /// Classify an orbit by its semi-major axis. Both edges count as inside.
    pub fn classify(&self, semi_major_axis: Length) -> HabitableZoneStatus {
        if self.contains(semi_major_axis) {
            HabitableZoneStatus::In
        } else if semi_major_axis < self.inner_edge {
            HabitableZoneStatus::TooClose
        } else {
            HabitableZoneStatus::TooFar
        }
    }

    pub fn width(&self) -> Length {
        self.outer_edge - self.inner_edge
    }
}

/// Where an orbit sits relative to the habitable zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum HabitableZoneStatus {
    In,
    TooClose,
    TooFar,
}

impl HabitableZoneStatus {
    /// Canonical label: `in`, `too-close` or `too-far`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitableZoneStatus::In => "in",
            HabitableZoneStatus::TooClose => "too-close",
            HabitableZoneStatus::TooFar => "too-far",
        }
    }

    /// Human-readable label for telemetry overlays.
    pub fn describe(&self) -> &'static str {
        match self {
            HabitableZoneStatus::In => "In the habitable zone",
            HabitableZoneStatus::TooClose => "Too close to the star",
            HabitableZoneStatus::TooFar => "Too far from the star",
        }
    }
}

impl fmt::Display for HabitableZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
