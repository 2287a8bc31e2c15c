//! Linear undo/redo history.
//!
//! Two stacks split a single timeline around the current position:
//! `past` holds the states behind it, `future` the states undone away from.
//! Both are most-recent-last.

use super::id::StateId;

/// Undo and redo stacks for a state machine.
///
/// The current state is never stored here; callers pass it in whenever
/// the position moves, and receive the state to move to.
///
/// # Example
///
/// ```rust
/// use rewind::core::{StateId, UndoHistory};
///
/// let mut history = UndoHistory::new();
/// history.advance(StateId::from("idle"));
///
/// let back = history.undo(StateId::from("running"));
/// assert_eq!(back, Some(StateId::from("idle")));
///
/// let forward = history.redo(StateId::from("idle"));
/// assert_eq!(forward, Some(StateId::from("running")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoHistory {
    past: Vec<StateId>,
    future: Vec<StateId>,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record forward movement away from `left`.
    ///
    /// Any redo branch is discarded first.
    pub fn advance(&mut self, left: StateId) {
        self.future.clear();
        self.past.push(left);
    }

    /// Step back from `current`.
    ///
    /// Returns the state to move to, or `None` if there is nothing to undo.
    /// `current` is only consumed when a step happens.
    pub fn undo(&mut self, current: StateId) -> Option<StateId> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward from `current`, the mirror of [`UndoHistory::undo`].
    pub fn redo(&mut self, current: StateId) -> Option<StateId> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// States behind the current position, oldest first.
    pub fn past(&self) -> &[StateId] {
        &self.past
    }

    /// States ahead of the current position, farthest first.
    pub fn future(&self) -> &[StateId] {
        &self.future
    }
}
