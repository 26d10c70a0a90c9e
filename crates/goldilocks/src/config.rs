//! Display scaling and stepping configuration.
//!
//! Physical radii of stars and planets are far too small to see next to an
//! orbit drawn in AU, so the renderer works with scaled, floored display radii.
//! The constants controlling that scaling live here, loadable from RON.

use serde::{Deserialize, Serialize};
use units::{Length, SOLAR_RADIUS_AU};

use crate::clock::DEFAULT_PHASE_STEP;
use crate::error::ConfigError;

/// Scaling rules that map physical radii to drawable radii (all in AU).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayScale {
    /// Smallest star radius ever drawn.
    pub min_star_radius_au: f64,
    /// Size of one solar radius on screen.
    pub sun_radius_au: f64,
    /// Smallest planet radius ever drawn.
    pub min_planet_radius_au: f64,
    /// Size of one Earth radius on screen.
    pub planet_scale_au_per_earth_radius: f64,
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self {
            min_star_radius_au: 0.05,
            sun_radius_au: SOLAR_RADIUS_AU,
            min_planet_radius_au: 0.01,
            planet_scale_au_per_earth_radius: 0.02,
        }
    }
}

impl DisplayScale {
    /// Display radius for a star of the given radius in R☉.
    pub fn star_radius(&self, stellar_radius_solar: f64) -> Length {
        Length::from_au(stellar_radius_solar * self.sun_radius_au)
            .max(Length::from_au(self.min_star_radius_au))
    }

    /// Display radius for a planet of the given radius in R⊕.
    pub fn planet_radius(&self, planet_radius_earth: f64) -> Length {
        Length::from_au(planet_radius_earth * self.planet_scale_au_per_earth_radius)
            .max(Length::from_au(self.min_planet_radius_au))
    }

    /// Rejects any scale that could produce a non-positive display radius.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("min_star_radius_au", self.min_star_radius_au)?;
        require_positive("sun_radius_au", self.sun_radius_au)?;
        require_positive("min_planet_radius_au", self.min_planet_radius_au)?;
        require_positive(
            "planet_scale_au_per_earth_radius",
            self.planet_scale_au_per_earth_radius,
        )
    }
}

/// Top-level simulation configuration.
///
/// # Examples
///
/// ```
/// use goldilocks::SimulationConfig;
///
/// let config = SimulationConfig::from_ron_str("(phase_step: 0.01)").unwrap();
/// assert_eq!(config.phase_step, 0.01);
/// assert_eq!(config.display, Default::default());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Display radius scaling.
    pub display: DisplayScale,
    /// Phase advanced per render tick (radians of true anomaly).
    pub phase_step: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            display: DisplayScale::default(),
            phase_step: DEFAULT_PHASE_STEP,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a config from RON text. Missing fields take defaults.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(ConfigError::Serialize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()?;
        require_positive("phase_step", self.phase_step)
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, value })
    }
}
