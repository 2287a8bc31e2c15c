//! Configuration errors.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors raised while loading, building or validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitial,

    #[error("Configuration declares no states")]
    NoStates,

    #[error("Initial state '{initial}' is not declared")]
    UnknownInitial { initial: StateId },

    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    UnknownTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },

    /// The configuration text could not be parsed
    #[error("Configuration parse failed: {0}")]
    Parse(String),
}
