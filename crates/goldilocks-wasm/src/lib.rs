//! WASM bindings for goldilocks simulation sessions.
//!
//! A browser renderer creates one session per selected planet, then on every
//! animation frame advances it and reads a snapshot. All physics stays on the
//! Rust side; JavaScript only draws what the snapshots say.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const id = session_create(selectedRow);        // catalog row object
//! const params = session_parameters(id);         // radii, orbit, habitable zone
//! const path = session_orbit_path(id);           // 65 [x, y, z] points
//!
//! function frame() {
//!   const snap = session_tick(id);               // advance by the default step
//!   drawPlanet(snap.position);
//!   showDays(snap.elapsedDays, snap.elapsedYears);
//!   requestAnimationFrame(frame);
//! }
//!
//! // Later, when the visualization closes
//! session_destroy(id);
//! ```

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use goldilocks::{HabitableZone, RawRecord, SimulationConfig, SimulationState};

mod session;

#[cfg(test)]
mod session_test;

pub use session::{SessionId, Sessions};

// Unit types serialize as plain numbers (serde(transparent))
#[wasm_bindgen(typescript_custom_section)]
const TS_UNIT_TYPES: &'static str = r#"
/** Length in AU (astronomical units) */
export type Length = number;
/** Time in days */
export type Time = number;
"#;

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn unknown_session(id: SessionId) -> JsError {
    JsError::new(&format!("Unknown session: {}", id))
}

// =============================================================================
// Thread-local session storage
// =============================================================================

thread_local! {
    static SESSIONS: RefCell<Sessions> = RefCell::new(Sessions::default());
}

fn with_session<T>(
    id: SessionId,
    f: impl FnOnce(&SimulationState) -> Result<T, JsError>,
) -> Result<T, JsError> {
    SESSIONS.with(|sessions| {
        let sessions = sessions.borrow();
        let state = sessions.get(id).ok_or_else(|| unknown_session(id))?;
        f(state)
    })
}

// =============================================================================
// Configuration
// =============================================================================

/// Replace the display/stepping config from RON text.
///
/// Applies to sessions created afterwards; existing sessions keep the radii
/// and per-tick phase step they were built with.
#[wasm_bindgen]
pub fn configure(ron_text: &str) -> Result<(), JsError> {
    let config =
        SimulationConfig::from_ron_str(ron_text).map_err(|e| JsError::new(&e.to_string()))?;
    SESSIONS.with(|sessions| sessions.borrow_mut().set_config(config));
    Ok(())
}

// =============================================================================
// Session lifecycle
// =============================================================================

/// Create a session from a catalog row object. Returns the session id.
#[wasm_bindgen]
pub fn session_create(record: JsValue) -> Result<SessionId, JsError> {
    let record: RawRecord = from_js(record)?;
    Ok(SESSIONS.with(|sessions| sessions.borrow_mut().create(&record)))
}

/// Create a session from a JSON-encoded catalog row, e.g. a stored selection.
#[wasm_bindgen]
pub fn session_create_from_json(json: &str) -> Result<SessionId, JsError> {
    let record = RawRecord::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(SESSIONS.with(|sessions| sessions.borrow_mut().create(&record)))
}

/// Drop a session. Returns false if the id was unknown.
#[wasm_bindgen]
pub fn session_destroy(id: SessionId) -> bool {
    SESSIONS.with(|sessions| sessions.borrow_mut().remove(id))
}

// =============================================================================
// Per-frame stepping
// =============================================================================

/// Advance a session by `dt` radians of phase and return its snapshot.
#[wasm_bindgen]
pub fn session_advance(id: SessionId, dt: f64) -> Result<JsValue, JsError> {
    SESSIONS.with(|sessions| {
        let mut sessions = sessions.borrow_mut();
        let state = sessions.advance(id, dt).ok_or_else(|| unknown_session(id))?;
        to_js(&state.snapshot())
    })
}

/// Advance a session by the configured per-frame step and return its snapshot.
#[wasm_bindgen]
pub fn session_tick(id: SessionId) -> Result<JsValue, JsError> {
    SESSIONS.with(|sessions| {
        let mut sessions = sessions.borrow_mut();
        let state = sessions.tick(id).ok_or_else(|| unknown_session(id))?;
        to_js(&state.snapshot())
    })
}

// =============================================================================
// Read-only views
// =============================================================================

/// Current snapshot without advancing.
#[wasm_bindgen]
pub fn session_snapshot(id: SessionId) -> Result<JsValue, JsError> {
    with_session(id, |state| to_js(&state.snapshot()))
}

/// Derived system parameters (radii, orbit, habitable zone and status).
#[wasm_bindgen]
pub fn session_parameters(id: SessionId) -> Result<JsValue, JsError> {
    with_session(id, |state| to_js(state.parameters()))
}

/// Cached orbit path as an array of `[x, y, z]` points in AU.
#[wasm_bindgen]
pub fn session_orbit_path(id: SessionId) -> Result<JsValue, JsError> {
    with_session(id, |state| {
        let points: Vec<[f64; 3]> = state
            .orbit_path()
            .iter()
            .map(|p| [p.x, p.y, p.z])
            .collect();
        to_js(&points)
    })
}

/// Position `[x, y, z]` at an arbitrary phase, without touching the clock.
#[wasm_bindgen]
pub fn session_position_at_phase(id: SessionId, phase: f64) -> Result<Vec<f64>, JsError> {
    with_session(id, |state| {
        let p = state.position_at_phase(phase);
        Ok(vec![p.x, p.y, p.z])
    })
}

// =============================================================================
// Stateless helpers
// =============================================================================

/// Habitable zone for a log-luminosity, `log10(L/L☉)`; Sun-like when omitted.
#[wasm_bindgen]
pub fn habitable_zone(log_luminosity: Option<f64>) -> Result<JsValue, JsError> {
    to_js(&HabitableZone::from_log_luminosity(log_luminosity))
}
