use approx::assert_relative_eq;
use units::SOLAR_RADIUS_AU;

use crate::clock::DEFAULT_PHASE_STEP;
use crate::config::{DisplayScale, SimulationConfig};
use crate::error::ConfigError;

#[test]
fn defaults_are_valid() {
    let config = SimulationConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.phase_step, DEFAULT_PHASE_STEP);
    assert_eq!(config.display.sun_radius_au, SOLAR_RADIUS_AU);
}

#[test]
fn small_bodies_are_floored() {
    let scale = DisplayScale::default();

    // A Sun-sized star is far below the display floor
    assert_relative_eq!(scale.star_radius(1.0).to_au(), 0.05);
    // A red giant is not
    assert_relative_eq!(scale.star_radius(100.0).to_au(), 100.0 * SOLAR_RADIUS_AU);

    assert_relative_eq!(scale.planet_radius(0.1).to_au(), 0.01);
    assert_relative_eq!(scale.planet_radius(11.0).to_au(), 0.22);
    assert_relative_eq!(scale.planet_radius(-3.0).to_au(), 0.01);
}

#[test]
fn partial_ron_fills_defaults() {
    let config = SimulationConfig::from_ron_str("(display: (min_star_radius_au: 0.1))").unwrap();
    assert_eq!(config.display.min_star_radius_au, 0.1);
    assert_eq!(
        config.display.min_planet_radius_au,
        DisplayScale::default().min_planet_radius_au
    );
    assert_eq!(config.phase_step, DEFAULT_PHASE_STEP);
}

#[test]
fn ron_round_trip() {
    let config = SimulationConfig {
        phase_step: 0.02,
        ..Default::default()
    };
    let text = config.to_ron_string().unwrap();
    let parsed = SimulationConfig::from_ron_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn non_positive_values_are_rejected() {
    let err = SimulationConfig::from_ron_str("(phase_step: 0.0)").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "phase_step",
            ..
        }
    ));

    let scale = DisplayScale {
        min_planet_radius_au: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        scale.validate(),
        Err(ConfigError::Invalid {
            field: "min_planet_radius_au",
            ..
        })
    ));
}

#[test]
fn malformed_ron_is_a_parse_error() {
    let err = SimulationConfig::from_ron_str("(phase_step: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));
}
