//! Errors returned by state-changing operations.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when moving a [`StateMachine`](super::StateMachine).
///
/// The machine is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The target state is not declared in the configuration.
    #[error("State '{state}' doesn't exist")]
    UnknownState { state: StateId },

    /// The event has no transition from the current state.
    #[error("Cannot trigger event '{event}' for state '{state}'")]
    InvalidTransition { state: StateId, event: EventId },
}
