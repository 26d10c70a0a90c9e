//! Drive a simulation state through one full orbit
//!
//! Reads a catalog record as JSON (from a file argument, or a built-in
//! Kepler-452 b record), builds the state and steps it the way a render loop
//! would, printing telemetry every quarter orbit.
//!
//! Run with: RUST_LOG=goldilocks=debug cargo run --package goldilocks --example simulate_record [record.json]

use std::f64::consts::TAU;

use goldilocks::{RawRecord, SimulationConfig, SimulationState};
use tracing_subscriber::EnvFilter;

const KEPLER_452B: &str = r#"{
    "pl_name": "Kepler-452 b",
    "hostname": "Kepler-452",
    "st_rad": 1.11,
    "st_lum": 0.083,
    "pl_orbsmax": 1.046,
    "pl_orbeccen": null,
    "pl_rade": 1.63,
    "pl_orbper": "384.843"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => KEPLER_452B.to_string(),
    };
    let record = RawRecord::from_json(&text)?;
    let config = SimulationConfig::default();

    let mut state = SimulationState::build_with(&record, &config.display);
    let params = state.parameters();

    println!("{} orbiting {}", params.planet_name, params.host_name);
    println!("{}", "=".repeat(60));
    println!(
        "  Orbit: a = {:.3} AU, e = {:.3}{}",
        params.semi_major_axis.to_au(),
        params.eccentricity,
        if params.eccentricity_known { "" } else { " (assumed)" }
    );
    println!("  Period: {:.1} days", params.orbital_period.to_days());
    println!(
        "  Habitable zone: {:.3} - {:.3} AU -> {}",
        params.habitable_zone_inner.to_au(),
        params.habitable_zone_outer.to_au(),
        params.habitable_zone_status.describe()
    );
    println!(
        "  Display radii: star {:.4} AU, planet {:.4} AU",
        params.star_radius_display.to_au(),
        params.planet_radius_display.to_au()
    );

    let ticks_per_orbit = (TAU / config.phase_step).ceil() as usize;
    let report_every = ticks_per_orbit / 4;

    println!("\n{:>8} {:>10} {:>10} {:>10} {:>10}", "tick", "x", "z", "r", "days");
    for tick in 1..=ticks_per_orbit {
        state.advance(config.phase_step);
        if tick % report_every == 0 || tick == ticks_per_orbit {
            let snapshot = state.snapshot();
            println!(
                "{:>8} {:>10.4} {:>10.4} {:>10.4} {:>10.2}",
                tick,
                snapshot.position[0],
                snapshot.position[2],
                snapshot.orbital_radius,
                snapshot.elapsed_days
            );
        }
    }

    println!(
        "\nElapsed: {:.2} days ({:.3} years)",
        state.elapsed_days(),
        state.elapsed_years()
    );

    Ok(())
}
