//! Rewind: a declarative finite state machine with undo/redo
//!
//! Rewind is meant to be embedded in larger applications as the single
//! source of truth for "what state am I in and what can happen next".
//! A validated configuration declares the states and their event-driven
//! transitions; the machine tracks the current state and a linear history
//! that can be stepped backwards and forwards.
//!
//! # Core Concepts
//!
//! - **Configuration**: Initial state plus a transition table per state
//! - **Trigger**: Event-driven movement through the transition table
//! - **Change state**: Direct, table-free jump to any declared state
//! - **History**: Undo/redo stacks; any forward move discards redo
//!
//! # Example
//!
//! ```rust
//! use rewind::{Config, MachineError, StateMachine};
//!
//! let config = Config::from_json(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle":    { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "pause": "paused" } },
//!         "paused":  { "transitions": { "resume": "running" } }
//!     }
//! }"#).unwrap();
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! assert!(matches!(
//!     machine.trigger("resume"),
//!     Err(MachineError::InvalidTransition { .. })
//! ));
//!
//! machine.trigger("start").unwrap();
//! assert_eq!(machine.states(Some(&"pause".into())), vec!["running"]);
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "idle");
//! assert!(!machine.undo());
//! ```

pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder, ConfigError, StateConfig};
pub use core::{
    EventId, StateId, TransitionKind, TransitionLog, TransitionRecord, UndoHistory,
    DEFAULT_JOURNAL_CAPACITY,
};
pub use machine::{MachineError, StateMachine};
