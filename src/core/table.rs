//! Declarative state table definitions.
//!
//! A machine is configured from a [`StateTable`]: an ordered mapping from
//! state name to that state's outgoing transitions. The table is supplied
//! wholly at construction and never mutated afterwards; the engine exposes
//! no API for adding or removing states from a live machine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Definition of a single state: its named outgoing transitions.
///
/// The `transitions` field distinguishes two conditions that behave
/// differently at runtime:
///
/// - `None` - the state declares no transition table at all. Triggering an
///   event from such a state is a tolerated no-op, but filtered state
///   queries ([`Machine::states_for`](crate::Machine::states_for)) treat
///   it as an error.
/// - `Some` with an empty map - the state has a table with zero entries.
///   Triggering any event from it is rejected as an unknown transition.
///
/// # Example
///
/// ```rust
/// use flowstate::core::StateDef;
///
/// let hub = StateDef::with_transitions([("go", "B"), ("back", "A")]);
/// assert!(hub.transitions.is_some());
///
/// let dead_end = StateDef::new();
/// assert_eq!(dead_end.transitions.as_ref().map(|t| t.len()), Some(0));
///
/// let opaque = StateDef::without_table();
/// assert!(opaque.transitions.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event name to target state name. Absent entirely when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<IndexMap<String, String>>,
}

impl StateDef {
    /// Create a state with an empty transition table.
    pub fn new() -> Self {
        Self {
            transitions: Some(IndexMap::new()),
        }
    }

    /// Create a state with no transition table at all.
    pub fn without_table() -> Self {
        Self { transitions: None }
    }

    /// Create a state from `(event, target)` pairs, preserving their order.
    pub fn with_transitions<I, E, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        Self {
            transitions: Some(
                pairs
                    .into_iter()
                    .map(|(event, target)| (event.into(), target.into()))
                    .collect(),
            ),
        }
    }

    /// Look up the target state for an event, if this state has a table
    /// and the table has the event.
    pub fn target_for(&self, event: &str) -> Option<&str> {
        self.transitions
            .as_ref()
            .and_then(|table| table.get(event))
            .map(String::as_str)
    }

    /// Whether this state's table contains the event as a key.
    ///
    /// Returns `None` when the state has no table at all, so callers can
    /// tell that condition apart from a plain miss.
    pub fn handles(&self, event: &str) -> Option<bool> {
        self.transitions
            .as_ref()
            .map(|table| table.contains_key(event))
    }
}

/// Ordered, immutable mapping from state name to [`StateDef`].
///
/// Insertion order is preserved and is the documented iteration order for
/// every query that returns state names, so results are deterministic for
/// a given configuration.
///
/// # Example
///
/// ```rust
/// use flowstate::core::{StateDef, StateTable};
///
/// let table: StateTable = [
///     ("A".to_string(), StateDef::with_transitions([("go", "B")])),
///     ("B".to_string(), StateDef::new()),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(table.contains("A"));
/// assert_eq!(table.names().collect::<Vec<_>>(), vec!["A", "B"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTable(IndexMap<String, StateDef>);

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Whether `name` is a member of the table's key set.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Get a state's definition.
    pub fn get(&self, name: &str) -> Option<&StateDef> {
        self.0.get(name)
    }

    /// All state names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// All `(name, definition)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.0.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no states.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, StateDef)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (String, StateDef)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Construction input for a machine: the state table plus the initial
/// state name.
///
/// The serialized shape is:
///
/// ```json
/// {
///     "states": {
///         "A": { "transitions": { "go": "B" } },
///         "B": {}
///     },
///     "initial": "A"
/// }
/// ```
///
/// A state entry without a `transitions` key deserializes with
/// `transitions: None`.
///
/// # Example
///
/// ```rust
/// use flowstate::core::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{ "states": { "A": { "transitions": { "go": "B" } }, "B": {} }, "initial": "A" }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "A");
/// assert!(config.states.contains("B"));
/// assert!(config.states.get("B").unwrap().transitions.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// The complete state table, fixed for the machine's lifetime.
    pub states: StateTable,
    /// Name of the state the machine starts in and returns to on reset.
    pub initial: String,
}

impl MachineConfig {
    /// Create a config from a table and an initial state name.
    pub fn new(states: StateTable, initial: impl Into<String>) -> Self {
        Self {
            states,
            initial: initial.into(),
        }
    }

    /// Parse a config from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> StateTable {
        [
            (
                "A".to_string(),
                StateDef::with_transitions([("go", "B")]),
            ),
            (
                "B".to_string(),
                StateDef::with_transitions([("back", "A"), ("go", "C")]),
            ),
            ("C".to_string(), StateDef::new()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn table_preserves_insertion_order() {
        let table = sample_table();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn membership_and_lookup_agree() {
        let table = sample_table();
        assert!(table.contains("B"));
        assert!(table.get("B").is_some());
        assert!(!table.contains("Z"));
        assert!(table.get("Z").is_none());
    }

    #[test]
    fn target_for_resolves_declared_transitions() {
        let def = StateDef::with_transitions([("go", "B"), ("back", "A")]);
        assert_eq!(def.target_for("go"), Some("B"));
        assert_eq!(def.target_for("jump"), None);
    }

    #[test]
    fn handles_distinguishes_missing_table_from_missing_event() {
        let with_table = StateDef::with_transitions([("go", "B")]);
        assert_eq!(with_table.handles("go"), Some(true));
        assert_eq!(with_table.handles("back"), Some(false));

        let without_table = StateDef::without_table();
        assert_eq!(without_table.handles("go"), None);
    }

    #[test]
    fn empty_table_and_absent_table_are_distinct() {
        assert_ne!(StateDef::new(), StateDef::without_table());
    }

    #[test]
    fn config_parses_from_json() {
        let config = MachineConfig::from_json(
            r#"{
                "states": {
                    "A": { "transitions": { "go": "B" } },
                    "B": { "transitions": {} },
                    "C": {}
                },
                "initial": "A"
            }"#,
        )
        .unwrap();

        assert_eq!(config.initial, "A");
        assert_eq!(
            config.states.names().collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert_eq!(
            config.states.get("A").unwrap().target_for("go"),
            Some("B")
        );
        assert_eq!(config.states.get("B").unwrap().handles("go"), Some(false));
        assert_eq!(config.states.get("C").unwrap().handles("go"), None);
    }

    #[test]
    fn config_roundtrips_through_json_in_order() {
        let config = MachineConfig::new(sample_table(), "A");
        let json = serde_json::to_string(&config).unwrap();
        let parsed = MachineConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(
            parsed.states.names().collect::<Vec<_>>(),
            config.states.names().collect::<Vec<_>>()
        );
    }

    #[test]
    fn absent_transitions_key_skipped_when_serializing() {
        let json = serde_json::to_string(&StateDef::without_table()).unwrap();
        assert_eq!(json, "{}");
    }
}
