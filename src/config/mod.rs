//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the
//! events it reacts to and where each one leads. It is read-only input:
//! the machine shares it and never mutates it.
//!
//! # Example
//!
//! ```rust
//! use rewind::config::Config;
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
//! assert_eq!(config.initial, "idle");
//! assert_eq!(config.states.len(), 3);
//! ```

pub mod builder;
pub mod error;

pub use builder::ConfigBuilder;
pub use error::ConfigError;

use crate::core::{EventId, StateId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transition table of a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Event → destination state
    #[serde(default)]
    pub transitions: BTreeMap<EventId, StateId>,
}

/// Complete machine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// State the machine starts in and returns to on reset
    pub initial: StateId,
    /// Every declared state with its transition table
    pub states: BTreeMap<StateId, StateConfig>,
}

impl Config {
    /// Start building a configuration in code.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the initial state and every transition target are declared.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states.is_empty() {
            return Err(ConfigError::NoStates);
        }
        if !self.contains(&self.initial) {
            return Err(ConfigError::UnknownInitial {
                initial: self.initial.clone(),
            });
        }
        for (state, descriptor) in &self.states {
            for (event, target) in &descriptor.transitions {
                if !self.contains(target) {
                    return Err(ConfigError::UnknownTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn contains(&self, state: &StateId) -> bool {
        self.states.contains_key(state)
    }

    pub fn state(&self, state: &StateId) -> Option<&StateConfig> {
        self.states.get(state)
    }

    /// Destination of `event` when fired from `state`, if one is configured.
    pub fn target(&self, state: &StateId, event: &EventId) -> Option<&StateId> {
        self.states.get(state)?.transitions.get(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: &str = r#"{
        "initial": "idle",
        "states": {
            "idle":    { "transitions": { "start": "running" } },
            "running": { "transitions": { "pause": "paused" } },
            "paused":  { "transitions": { "resume": "running" } }
        }
    }"#;

    #[test]
    fn from_json_loads_states_and_transitions() {
        let config = Config::from_json(PLAYER).unwrap();
        assert_eq!(config.initial, "idle");
        assert_eq!(
            config.target(&"paused".into(), &"resume".into()),
            Some(&StateId::from("running"))
        );
    }

    #[test]
    fn transitions_may_be_omitted() {
        let config =
            Config::from_json(r#"{ "initial": "done", "states": { "done": {} } }"#).unwrap();
        assert!(config.state(&"done".into()).unwrap().transitions.is_empty());
    }

    #[test]
    fn lookup_misses_are_none() {
        let config = Config::from_json(PLAYER).unwrap();
        assert!(config.target(&"idle".into(), &"pause".into()).is_none());
        assert!(config.target(&"missing".into(), &"start".into()).is_none());
        assert!(config.state(&"missing".into()).is_none());
        assert!(!config.contains(&"missing".into()));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Config::from_json("{ \"initial\": ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_initial_field_is_a_parse_error() {
        let err = Config::from_json(r#"{ "states": { "a": {} } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_states_are_rejected() {
        let err = Config::from_json(r#"{ "initial": "a", "states": {} }"#).unwrap_err();
        assert_eq!(err, ConfigError::NoStates);
    }

    #[test]
    fn undeclared_initial_is_rejected() {
        let err =
            Config::from_json(r#"{ "initial": "ghost", "states": { "a": {} } }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownInitial {
                initial: "ghost".into()
            }
        );
    }

    #[test]
    fn undeclared_target_is_rejected() {
        let err = Config::from_json(
            r#"{ "initial": "a", "states": { "a": { "transitions": { "go": "nowhere" } } } }"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownTarget {
                state: "a".into(),
                event: "go".into(),
                target: "nowhere".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Transition 'go' from 'a' targets undeclared state 'nowhere'"
        );
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config::from_json(PLAYER).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
