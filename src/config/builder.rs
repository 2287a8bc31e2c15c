//! Fluent builder for configurations.

use super::error::ConfigError;
use super::{Config, StateConfig};
use crate::core::{EventId, StateId};
use std::collections::BTreeMap;

/// Builder for constructing a [`Config`] in code.
///
/// States are declared implicitly by every transition that mentions them;
/// states without outgoing transitions can be declared with
/// [`ConfigBuilder::state`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: BTreeMap<StateId, StateConfig>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required). Also declares it.
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        let state = state.into();
        self.states.entry(state.clone()).or_default();
        self.initial = Some(state);
        self
    }

    /// Declare a state.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// When `event` occurs in `from`, move to `to`.
    ///
    /// A second call for the same `(from, event)` overwrites the destination.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        let to = to.into();
        self.states.entry(to.clone()).or_default();
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitial)?;
        let config = Config {
            initial,
            states: self.states,
        };
        config.validate()?;
        Ok(config)
    }
}
