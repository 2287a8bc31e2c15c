//! The state machine engine.
//!
//! A [`StateMachine`] tracks the current state of a validated [`Config`],
//! moves between states by event or by direct jump, and navigates a linear
//! undo/redo history of past positions.
//!
//! # Example
//!
//! ```rust
//! use rewind::{Config, StateMachine};
//!
//! let config = Config::builder()
//!     .initial("idle")
//!     .transition("idle", "start", "running")
//!     .transition("running", "pause", "paused")
//!     .transition("paused", "resume", "running")
//!     .build()
//!     .unwrap();
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! machine.trigger("start").unwrap();
//! machine.trigger("pause").unwrap();
//! assert_eq!(machine.state(), "paused");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "paused");
//! ```

pub mod error;

pub use error::MachineError;

use crate::config::{Config, ConfigError};
use crate::core::{EventId, StateId, TransitionKind, TransitionLog, UndoHistory};
use std::sync::Arc;
use tracing::{debug, trace};

/// Finite state machine with undo/redo over visited states.
///
/// Not internally synchronized; one caller drives it at a time.
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<Config>,
    state: StateId,
    history: UndoHistory,
    log: TransitionLog,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The configuration is validated first and then shared, never copied.
    pub fn new(config: impl Into<Arc<Config>>) -> Result<Self, ConfigError> {
        let config = config.into();
        config.validate()?;
        let state = config.initial.clone();
        debug!(initial = %state, states = config.states.len(), "state machine created");
        Ok(Self {
            config,
            state,
            history: UndoHistory::new(),
            log: TransitionLog::new(),
        })
    }

    /// Keep at most `capacity` records in the transition journal.
    ///
    /// Zero disables the journal. Older records beyond the new limit are
    /// dropped.
    pub fn with_journal_capacity(mut self, capacity: usize) -> Self {
        self.log.set_capacity(capacity);
        self
    }

    /// Current state.
    pub fn state(&self) -> &StateId {
        &self.state
    }

    pub fn initial(&self) -> &StateId {
        &self.config.initial
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Jump directly to `target`, ignoring the transition table.
    ///
    /// Always records the current state and discards redo history, even
    /// when `target` is the current state.
    pub fn change_state(&mut self, target: impl Into<StateId>) -> Result<(), MachineError> {
        let target = target.into();
        if !self.config.contains(&target) {
            return Err(MachineError::UnknownState { state: target });
        }
        self.advance(target, TransitionKind::Jump);
        Ok(())
    }

    /// Fire `event` against the current state's transition table.
    pub fn trigger(&mut self, event: impl Into<EventId>) -> Result<(), MachineError> {
        let event = event.into();
        let Some(target) = self.config.target(&self.state, &event).cloned() else {
            debug!(state = %self.state, event = %event, "event rejected");
            return Err(MachineError::InvalidTransition {
                state: self.state.clone(),
                event,
            });
        };
        self.advance(target, TransitionKind::Event(event));
        Ok(())
    }

    /// Return to the initial state, recording the current one in history.
    pub fn reset(&mut self) {
        let initial = self.config.initial.clone();
        self.advance(initial, TransitionKind::Reset);
    }

    /// Declared states, or only those reacting to `event` when given.
    ///
    /// Results come back in identifier order.
    pub fn states(&self, event: Option<&EventId>) -> Vec<&StateId> {
        self.config
            .states
            .iter()
            .filter(|(_, descriptor)| event.map_or(true, |e| descriptor.transitions.contains_key(e)))
            .map(|(state, _)| state)
            .collect()
    }

    /// Events with a transition from the current state, in identifier order.
    pub fn events(&self) -> Vec<&EventId> {
        self.config
            .state(&self.state)
            .map(|descriptor| descriptor.transitions.keys().collect())
            .unwrap_or_default()
    }

    pub fn can_trigger(&self, event: &EventId) -> bool {
        self.config.target(&self.state, event).is_some()
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(self.state.clone()) else {
            trace!(state = %self.state, "nothing to undo");
            return false;
        };
        self.land(previous, TransitionKind::Undo);
        true
    }

    /// Step forward to the state last undone away from.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(self.state.clone()) else {
            trace!(state = %self.state, "nothing to redo");
            return false;
        };
        self.land(next, TransitionKind::Redo);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Empty both history stacks, keeping the current state.
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!(state = %self.state, "history cleared");
    }

    /// Undo stack, oldest first.
    pub fn history(&self) -> &[StateId] {
        self.history.past()
    }

    /// Redo stack, farthest first.
    pub fn undo_history(&self) -> &[StateId] {
        self.history.future()
    }

    /// Journal of the most recent state changes.
    pub fn transitions(&self) -> &TransitionLog {
        &self.log
    }

    /// Empty the transition journal, leaving state and history alone.
    pub fn clear_transitions(&mut self) {
        self.log.clear();
    }

    // Forward movement: the single path for jump, event and reset.
    fn advance(&mut self, target: StateId, kind: TransitionKind) {
        self.history.advance(self.state.clone());
        self.land(target, kind);
    }

    fn land(&mut self, target: StateId, kind: TransitionKind) {
        let from = std::mem::replace(&mut self.state, target);
        debug!(from = %from, to = %self.state, kind = %kind, "state changed");
        self.log.record(from, self.state.clone(), kind);
    }
}
