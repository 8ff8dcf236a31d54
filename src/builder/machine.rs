//! Builder for constructing machines with a fluent API.

use indexmap::IndexMap;

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateDef, StateTable};
use crate::machine::Machine;

/// Builder for assembling a state table and initial state in code,
/// as an alternative to deserializing a [`MachineConfig`].
///
/// States appear in the table in the order they are first mentioned,
/// whether through [`state`](MachineBuilder::state) or as the source of a
/// [`transition`](MachineBuilder::transition).
///
/// # Example
///
/// ```rust
/// use flowstate::MachineBuilder;
///
/// let mut machine = MachineBuilder::new()
///     .initial("A")
///     .transition("A", "go", "B")
///     .transition("B", "back", "A")
///     .transition("B", "go", "C")
///     .state("C")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.states(), vec!["A", "B", "C"]);
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.state(), "B");
/// ```
#[derive(Debug, Default)]
pub struct MachineBuilder {
    states: IndexMap<String, StateDef>,
    initial: Option<String>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    ///
    /// Like the engine's permissive constructor, the name is not required
    /// to be a declared state.
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Declare a state with an empty transition table, unless it already
    /// exists.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name.into()).or_insert_with(StateDef::new);
        self
    }

    /// Declare a state that carries no transition table at all.
    ///
    /// Triggering any event from such a state is a tolerated no-op, but
    /// filtered state queries error on it.
    pub fn state_without_table(mut self, name: impl Into<String>) -> Self {
        self.states.insert(name.into(), StateDef::without_table());
        self
    }

    /// Add a transition from `from` on `event` to `to`.
    ///
    /// Declares `from` if needed, and gives it a transition table if it
    /// was declared without one. An existing mapping for the same event
    /// is overwritten.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let def = self.states.entry(from.into()).or_insert_with(StateDef::new);
        def.transitions
            .get_or_insert_with(IndexMap::new)
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state was never set.
    pub fn config(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let states: StateTable = self.states.into_iter().collect();
        Ok(MachineConfig::new(states, initial))
    }

    /// Build the machine.
    /// Returns an error if the initial state was never set.
    pub fn build(self) -> Result<Machine, BuildError> {
        Ok(Machine::new(self.config()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_initial_state() {
        let result = MachineBuilder::new().state("A").build();
        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .initial("A")
            .transition("A", "go", "B")
            .transition("B", "go", "C")
            .state("C")
            .build()
            .unwrap();

        assert_eq!(machine.state(), "A");
        assert_eq!(machine.states(), vec!["A", "B", "C"]);
    }

    #[test]
    fn transition_declares_source_state_implicitly() {
        let config = MachineBuilder::new()
            .initial("A")
            .transition("A", "go", "B")
            .config()
            .unwrap();

        assert!(config.states.contains("A"));
        assert_eq!(config.states.get("A").unwrap().target_for("go"), Some("B"));
        // The target is not declared implicitly.
        assert!(!config.states.contains("B"));
    }

    #[test]
    fn transition_upgrades_state_without_table() {
        let config = MachineBuilder::new()
            .initial("A")
            .state_without_table("A")
            .transition("A", "go", "B")
            .config()
            .unwrap();

        assert_eq!(config.states.get("A").unwrap().handles("go"), Some(true));
    }

    #[test]
    fn state_does_not_overwrite_existing_transitions() {
        let config = MachineBuilder::new()
            .initial("A")
            .transition("A", "go", "B")
            .state("A")
            .config()
            .unwrap();

        assert_eq!(config.states.get("A").unwrap().target_for("go"), Some("B"));
    }

    #[test]
    fn later_transition_overwrites_same_event() {
        let config = MachineBuilder::new()
            .initial("A")
            .transition("A", "go", "B")
            .transition("A", "go", "C")
            .config()
            .unwrap();

        assert_eq!(config.states.get("A").unwrap().target_for("go"), Some("C"));
    }

    #[test]
    fn states_keep_first_mention_order() {
        let config = MachineBuilder::new()
            .initial("B")
            .transition("B", "back", "A")
            .state("A")
            .state("C")
            .config()
            .unwrap();

        assert_eq!(
            config.states.names().collect::<Vec<_>>(),
            vec!["B", "A", "C"]
        );
    }
}
