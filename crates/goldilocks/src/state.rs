//! Simulation state: immutable parameters plus an owned phase clock.
//!
//! A render loop holds one [`SimulationState`] per visualization session,
//! calls [`SimulationState::advance`] once per tick and reads positions and
//! elapsed time back. The state never renders anything itself.

use nalgebra::Point3;
use serde::Serialize;

use crate::clock::PhaseClock;
use crate::config::DisplayScale;
use crate::orbit::{OrbitGeometry, ORBIT_PATH_SEGMENTS};
use crate::parameters::SystemParameters;
use crate::record::{FieldSource, RawRecord};

/// Build a simulation state from a catalog record with the default display scale.
pub fn build_simulation_state(record: &RawRecord) -> SimulationState {
    SimulationState::build(record)
}

/// Derived parameters, cached orbit path and the phase clock for one session.
///
/// Only [`advance`](SimulationState::advance) mutates the state, and only the
/// clock; parameters and the orbit path are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    parameters: SystemParameters,
    orbit: OrbitGeometry,
    orbit_path: Vec<Point3<f64>>,
    clock: PhaseClock,
}

impl SimulationState {
    pub fn build<S>(record: &S) -> Self
    where
        S: FieldSource + ?Sized,
    {
        Self::build_with(record, &DisplayScale::default())
    }

    /// Build with a custom display scale.
    ///
    /// A scale that fails [`DisplayScale::validate`] is replaced by the default
    /// one, so construction stays total and display radii stay positive.
    pub fn build_with<S>(record: &S, scale: &DisplayScale) -> Self
    where
        S: FieldSource + ?Sized,
    {
        let default_scale;
        let scale = match scale.validate() {
            Ok(()) => scale,
            Err(err) => {
                tracing::warn!(%err, "invalid display scale, using defaults");
                default_scale = DisplayScale::default();
                &default_scale
            }
        };
        Self::from_parameters(SystemParameters::from_record(record, scale))
    }

    /// Start a session at phase zero from already-derived parameters.
    pub fn from_parameters(parameters: SystemParameters) -> Self {
        let orbit = parameters.orbit();
        let orbit_path = orbit.path(ORBIT_PATH_SEGMENTS);

        tracing::debug!(
            planet = %parameters.planet_name,
            host = %parameters.host_name,
            semi_major_axis_au = parameters.semi_major_axis.to_au(),
            eccentricity = parameters.eccentricity,
            status = %parameters.habitable_zone_status,
            "built simulation state"
        );

        Self {
            parameters,
            orbit,
            orbit_path,
            clock: PhaseClock::new(),
        }
    }

    pub fn parameters(&self) -> &SystemParameters {
        &self.parameters
    }

    pub fn orbit(&self) -> OrbitGeometry {
        self.orbit
    }

    /// The 65-point closed orbit path for drawing, computed once.
    pub fn orbit_path(&self) -> &[Point3<f64>] {
        &self.orbit_path
    }

    pub fn phase(&self) -> f64 {
        self.clock.phase()
    }

    /// Advance simulated time by `dt` radians of phase.
    pub fn advance(&mut self, dt: f64) {
        self.clock.advance(dt);
        tracing::trace!(dt, phase = self.clock.phase(), "advanced");
    }

    /// Planet position at the current phase.
    pub fn position(&self) -> Point3<f64> {
        self.orbit.position_at_phase(self.clock.phase())
    }

    /// Planet position at an arbitrary phase, independent of the clock.
    pub fn position_at_phase(&self, phase: f64) -> Point3<f64> {
        self.orbit.position_at_phase(phase)
    }

    /// Calendar days represented by the accumulated phase.
    pub fn elapsed_days(&self) -> f64 {
        self.clock.elapsed(self.parameters.orbital_period).to_days()
    }

    /// Elapsed days in Julian years (365.25 days).
    pub fn elapsed_years(&self) -> f64 {
        self.clock.elapsed(self.parameters.orbital_period).to_years()
    }

    /// Per-tick telemetry for the renderer.
    pub fn snapshot(&self) -> SimulationSnapshot {
        let position = self.position();
        SimulationSnapshot {
            phase: self.phase(),
            position: [position.x, position.y, position.z],
            orbital_radius: self.orbit.radius_at_phase(self.phase()).to_au(),
            orbits_completed: self.clock.orbits_completed(),
            elapsed_days: self.elapsed_days(),
            elapsed_years: self.elapsed_years(),
        }
    }
}

/// Values a render loop reads every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    /// Accumulated phase (radians)
    pub phase: f64,
    /// Planet position [x, y, z] in AU
    pub position: [f64; 3],
    /// Distance from the star in AU
    pub orbital_radius: f64,
    pub orbits_completed: f64,
    pub elapsed_days: f64,
    pub elapsed_years: f64,
}
