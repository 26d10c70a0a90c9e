//! Session table for simulation states driven from JavaScript.
//!
//! WASM is single-threaded, so sessions live in a plain map owned by a
//! thread-local; JavaScript holds only the numeric id.

use std::collections::HashMap;

use goldilocks::{FieldSource, SimulationConfig, SimulationState};

pub type SessionId = u32;

/// A simulation state plus the per-tick step it was created with.
#[derive(Debug)]
struct Session {
    state: SimulationState,
    phase_step: f64,
}

#[derive(Debug, Default)]
pub struct Sessions {
    sessions: HashMap<SessionId, Session>,
    next_id: SessionId,
    config: SimulationConfig,
}

impl Sessions {
    /// Create an empty table. An invalid config is replaced by the default.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            next_id: 0,
            config: checked(config),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replace the config used for sessions created from now on.
    ///
    /// Existing sessions keep the display scale and phase step they were
    /// created with. An invalid config is replaced by the default.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.config = checked(config);
    }

    /// Build a state from a record and store it under a fresh id.
    pub fn create<S>(&mut self, record: &S) -> SessionId
    where
        S: FieldSource + ?Sized,
    {
        let id = self.allocate_id();

        let state = SimulationState::build_with(record, &self.config.display);
        tracing::debug!(
            session = id,
            planet = %state.parameters().planet_name,
            "session created"
        );
        self.sessions.insert(
            id,
            Session {
                state,
                phase_step: self.config.phase_step,
            },
        );
        id
    }

    /// Next id not held by a live session; ids wrap around after `u32::MAX`.
    fn allocate_id(&mut self) -> SessionId {
        while self.sessions.contains_key(&self.next_id) {
            self.next_id = self.next_id.wrapping_add(1);
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn get(&self, id: SessionId) -> Option<&SimulationState> {
        self.sessions.get(&id).map(|session| &session.state)
    }

    /// Advance a session by `dt`, returning the updated state.
    pub fn advance(&mut self, id: SessionId, dt: f64) -> Option<&SimulationState> {
        let session = self.sessions.get_mut(&id)?;
        session.state.advance(dt);
        Some(&session.state)
    }

    /// Advance a session by the phase step it was created with.
    pub fn tick(&mut self, id: SessionId) -> Option<&SimulationState> {
        let session = self.sessions.get_mut(&id)?;
        session.state.advance(session.phase_step);
        Some(&session.state)
    }

    /// Drop a session. Returns false for unknown ids.
    pub fn remove(&mut self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn set_next_id(&mut self, id: SessionId) {
        self.next_id = id;
    }
}

fn checked(config: SimulationConfig) -> SimulationConfig {
    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            tracing::warn!(%err, "invalid simulation config, using defaults");
            SimulationConfig::default()
        }
    }
}
