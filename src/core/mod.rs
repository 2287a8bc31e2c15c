//! Core value types of the engine.
//!
//! This module contains the pieces the machine is assembled from:
//! - Opaque state and event identifiers
//! - The two-stack undo/redo history
//! - The bounded transition journal
//!
//! Nothing in here knows about configuration or transition tables.

mod history;
mod id;
mod journal;

pub use history::UndoHistory;
pub use id::{EventId, StateId};
pub use journal::{TransitionKind, TransitionLog, TransitionRecord, DEFAULT_JOURNAL_CAPACITY};
