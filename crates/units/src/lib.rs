//! Strongly-typed physical quantities used by the orbital simulation.
//!
//! Quantities are thin `f64` newtypes with a fixed base unit and
//! `serde(transparent)` serialization, so they travel over JSON as plain numbers.

pub mod length;
pub mod time;

#[cfg(test)]
mod length_test;

pub use length::{Length, SOLAR_RADIUS_AU};
pub use time::{Time, DAYS_PER_YEAR};
