//! Planar elliptical orbit geometry.
//!
//! Positions are parametrized directly by true anomaly: the phase accumulator
//! *is* the angle from periapsis. This gives constant angular steps per tick
//! rather than Keplerian time-accurate motion. The star sits at the focus at
//! the origin and the orbit lies flat in the x–z plane (y is always zero).

use std::f64::consts::TAU;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use units::Length;

/// Upper bound on eccentricity; keeps `1 + e·cos(t)` at least 0.01.
pub const MAX_ECCENTRICITY: f64 = 0.99;

/// Segments in the cached orbit path (the path has one more point, closing the loop).
pub const ORBIT_PATH_SEGMENTS: usize = 64;

/// Clamp an eccentricity into `[0, MAX_ECCENTRICITY]`; non-finite input becomes 0.
pub fn clamp_eccentricity(eccentricity: f64) -> f64 {
    if eccentricity.is_finite() {
        eccentricity.clamp(0.0, MAX_ECCENTRICITY)
    } else {
        0.0
    }
}

/// Shape and scale of a bound planar orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitGeometry {
    semi_major_axis: Length,
    eccentricity: f64,
}

impl OrbitGeometry {
    /// Create an orbit. Eccentricity is clamped into `[0, MAX_ECCENTRICITY]`.
    pub fn new(semi_major_axis: Length, eccentricity: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity: clamp_eccentricity(eccentricity),
        }
    }

    pub fn circular(radius: Length) -> Self {
        Self::new(radius, 0.0)
    }

    pub fn semi_major_axis(&self) -> Length {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// p = a(1 − e²)
    pub fn semi_latus_rectum(&self) -> Length {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2))
    }

    /// Closest approach, a(1 − e).
    pub fn periapsis(&self) -> Length {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance, a(1 + e).
    pub fn apoapsis(&self) -> Length {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Distance from the focus at true anomaly `phase`:
    /// r = a(1 − e²) / (1 + e·cos t)
    pub fn radius_at_phase(&self, phase: f64) -> Length {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * phase.cos())
    }

    /// Position at true anomaly `phase` (radians, any real value), in AU.
    ///
    /// # Examples
    ///
    /// ```
    /// use goldilocks::OrbitGeometry;
    /// use units::Length;
    ///
    /// let orbit = OrbitGeometry::new(Length::from_au(2.0), 0.5);
    /// let periapsis = orbit.position_at_phase(0.0);
    /// assert!((periapsis.x - 1.0).abs() < 1e-12);
    /// assert_eq!(periapsis.y, 0.0);
    /// ```
    pub fn position_at_phase(&self, phase: f64) -> Point3<f64> {
        let r = self.radius_at_phase(phase).to_au();
        let (sin, cos) = phase.sin_cos();
        Point3::new(r * cos, 0.0, r * sin)
    }

    /// Evenly spaced points over one full turn, first and last both at t = 0 (mod 2π).
    pub fn path(&self, segments: usize) -> Vec<Point3<f64>> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.position_at_phase(TAU * i as f64 / segments as f64))
            .collect()
    }
}
