//! Orbital simulation state for a single catalogued star/planet pair.
//!
//! A loosely-typed catalog record (`RawRecord`) is read once into an immutable
//! [`SystemParameters`] bundle: display radii, orbit geometry, orbital period and
//! the habitable-zone band with the planet's classification against it. A
//! [`SimulationState`] pairs those parameters with a phase clock that a render
//! loop advances every tick and reads positions and elapsed time from.
//!
//! ```
//! use goldilocks::{build_simulation_state, HabitableZoneStatus, RawRecord};
//!
//! let record = RawRecord::from_json(
//!     r#"{"pl_name": "Kepler-22 b", "hostname": "Kepler-22", "pl_orbsmax": 0.849, "st_lum": -0.1}"#,
//! )
//! .unwrap();
//!
//! let mut state = build_simulation_state(&record);
//! assert_eq!(state.parameters().habitable_zone_status, HabitableZoneStatus::In);
//!
//! state.advance(goldilocks::DEFAULT_PHASE_STEP);
//! let position = state.position();
//! assert_eq!(position.y, 0.0);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod habitable_zone;
pub mod orbit;
pub mod parameters;
pub mod record;
pub mod state;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod orbit_test;

pub use clock::{PhaseClock, DEFAULT_PHASE_STEP};
pub use config::{DisplayScale, SimulationConfig};
pub use error::{ConfigError, RecordError};
pub use habitable_zone::{HabitableZone, HabitableZoneStatus};
pub use orbit::{OrbitGeometry, MAX_ECCENTRICITY, ORBIT_PATH_SEGMENTS};
pub use parameters::SystemParameters;
pub use record::{FieldSource, RawRecord};
pub use state::{build_simulation_state, SimulationSnapshot, SimulationState};
