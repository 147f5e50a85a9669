//! Error types for counter construction and engine lookups.
//!
//! Rendering never fails: locale fallback, zero durations and jitter without a
//! step are all handled silently. Only configuration and handle lookups error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CounterError {
    /// A configuration field holds a value the engine cannot run with.
    #[error("invalid config for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The engine has no counter with this id (never created or removed).
    #[error("unknown counter id {id}")]
    UnknownCounter { id: u32 },

    /// JSON config could not be parsed.
    #[error("config parse error: {reason}")]
    Parse { reason: String },
}

impl CounterError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = CounterError> = std::result::Result<T, E>;
