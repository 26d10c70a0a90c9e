use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Julian year length, used for every days-to-years conversion.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// A span of time, stored in days.
///
/// Orbital periods arrive from catalogs in days, so days are the base unit
/// here; years are derived with the Julian year.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let period = Time::from_days(365.25);
/// assert_eq!(period.to_years(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: days

impl Time {
    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value)
    }

    /// Returns the time in days.
    pub fn to_days(&self) -> f64 {
        self.0
    }

    /// Converts the time to Julian years.
    pub fn to_years(&self) -> f64 {
        self.0 / DAYS_PER_YEAR
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}
