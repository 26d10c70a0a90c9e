//! Error types for the fallible edges of the crate.
//!
//! Building a simulation state never fails; only parsing a record or loading
//! configuration can.

/// Errors produced while turning external data into a [`RawRecord`](crate::RawRecord).
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The input was not valid JSON.
    #[error("failed to parse record: {0}")]
    Parse(#[source] serde_json::Error),

    /// The input parsed, but was not a flat object of fields.
    #[error("record must be an object, found {0}")]
    NotAnObject(&'static str),
}

/// Errors produced while loading or validating a [`SimulationConfig`](crate::SimulationConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// A scale or step value that must be finite and positive was not.
    #[error("config value `{field}` must be finite and positive, got {value}")]
    Invalid { field: &'static str, value: f64 },
}
