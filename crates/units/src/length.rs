use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Sub};

/// Solar radius in AU: 1 R☉ = 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;

/// A distance, stored in astronomical units.
///
/// Orbit scales, habitable-zone edges and display radii all share this type,
/// so comparisons between them are type-checked.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let inner = Length::from_au(0.75);
/// let orbit = Length::from_au(1.0);
/// assert!(inner < orbit);
/// assert_eq!((orbit - inner).to_au(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub const fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Returns the larger of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}
