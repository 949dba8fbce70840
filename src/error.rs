//! Error types

use thiserror::Error;

/// Errors raised while loading the event configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required instant was not supplied (or was blank).
    #[error("missing {field} instant")]
    Missing { field: &'static str },

    /// An instant could not be parsed as ISO-8601.
    #[error("invalid {field} instant {value:?}: {reason}")]
    InvalidInstant {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The countdown refresh interval must be non-zero.
    #[error("tick interval must be greater than zero")]
    InvalidTickInterval,
}
