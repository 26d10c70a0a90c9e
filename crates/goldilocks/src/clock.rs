//! Simulated-time cursor.
//!
//! The clock counts phase (radians of true anomaly), never days. Elapsed
//! calendar time depends on the orbit it is paired with: one full turn of
//! phase is one orbital period.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use units::Time;

/// Phase advanced per render tick by default.
pub const DEFAULT_PHASE_STEP: f64 = 0.005;

/// Monotonic phase accumulator.
///
/// The stored phase is never wrapped to `[0, 2π)`; positions are computed with
/// periodic trigonometric functions, so wrapping is unnecessary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseClock {
    phase: f64,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Add `dt` radians of phase. Non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() {
            tracing::warn!(dt, "ignoring non-finite phase step");
            return;
        }
        self.phase += dt;
    }

    /// Fractional number of full turns so far.
    pub fn orbits_completed(&self) -> f64 {
        self.phase / TAU
    }

    /// Calendar time elapsed for an orbit with the given period.
    pub fn elapsed(&self, period: Time) -> Time {
        period * self.orbits_completed()
    }
}
