//! The state machine engine.

use crate::core::{History, MachineConfig, StateTable};
use crate::machine::error::MachineError;

/// A finite state machine with a linear undo/redo history.
///
/// A machine is built from a [`MachineConfig`]: a declarative
/// [`StateTable`] plus an initial state name. The table is fixed for the
/// machine's lifetime; the active state and history are the only mutable
/// parts. Every validated move is appended to the history, and
/// [`undo`](Machine::undo)/[`redo`](Machine::redo) walk the cursor over
/// it.
///
/// A machine is not internally synchronized. All operations take `&self`
/// or `&mut self`, so the borrow checker already serializes access to one
/// instance; to share a machine across threads, wrap it in a mutex.
///
/// # Example
///
/// ```rust
/// use flowstate::{Machine, MachineConfig};
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "states": {
///             "draft":     { "transitions": { "submit": "review" } },
///             "review":    { "transitions": { "approve": "published", "reject": "draft" } },
///             "published": { "transitions": {} }
///         },
///         "initial": "draft"
///     }"#,
/// )
/// .unwrap();
///
/// let mut machine = Machine::new(config);
/// machine.trigger("submit").unwrap();
/// machine.trigger("approve").unwrap();
/// assert_eq!(machine.state(), "published");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "review");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "published");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    table: StateTable,
    initial: String,
    active: String,
    history: History,
}

impl Machine {
    /// Create a machine from a configuration.
    ///
    /// The initial state becomes active and is the history's first entry.
    /// The initial name is NOT checked against the state table: a machine
    /// may start in a name the table does not know. Such a machine
    /// reports that name from [`state`](Machine::state), and
    /// [`trigger`](Machine::trigger) on it is a no-op (no transition
    /// table). Use [`validated`](Machine::validated) to reject that
    /// configuration up front.
    pub fn new(config: MachineConfig) -> Self {
        let MachineConfig { states, initial } = config;
        let history = History::new(initial.clone());
        Self {
            table: states,
            active: initial.clone(),
            initial,
            history,
        }
    }

    /// Create a machine, rejecting an initial state that is not a member
    /// of the state table.
    pub fn validated(config: MachineConfig) -> Result<Self, MachineError> {
        if !config.states.contains(&config.initial) {
            return Err(MachineError::InvalidState(config.initial));
        }
        Ok(Self::new(config))
    }

    /// The currently active state name.
    pub fn state(&self) -> &str {
        &self.active
    }

    /// The initial state name the machine was configured with.
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// The state table the machine was configured with.
    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// Jump to `target`, recording the move in the history.
    ///
    /// The jump is unconditional: `target` only has to be a member of the
    /// state table, not reachable from the active state via any declared
    /// transition. A move from a non-tail history position discards the
    /// abandoned future, including the entry under the cursor, before
    /// the move is appended.
    ///
    /// # Errors
    ///
    /// [`MachineError::InvalidState`] when `target` is not in the table;
    /// the machine is left untouched.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.table.contains(target) {
            return Err(MachineError::InvalidState(target.to_string()));
        }
        self.active = target.to_string();
        self.history.record(self.active.clone());
        Ok(())
    }

    /// Fire an event, following the active state's transition table.
    ///
    /// When the active state declares no transition table at all (or is
    /// not in the table), the call succeeds without doing anything. This
    /// is deliberately different from the case where a table exists but
    /// lacks the event, which is an error.
    ///
    /// # Errors
    ///
    /// [`MachineError::UnknownTransition`] when the active state's table
    /// has no entry for `event`; [`MachineError::InvalidState`] when the
    /// mapped target is itself not in the state table. Either way the
    /// machine is left untouched.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = {
            let Some(def) = self.table.get(&self.active) else {
                return Ok(());
            };
            if def.transitions.is_none() {
                return Ok(());
            }
            match def.target_for(event) {
                Some(target) => target.to_string(),
                None => {
                    return Err(MachineError::UnknownTransition {
                        state: self.active.clone(),
                        event: event.to_string(),
                    })
                }
            }
        };
        self.change_state(&target)
    }

    /// Return to the initial state and forget the entire history.
    ///
    /// Afterwards the history holds the initial state as its only entry.
    pub fn reset(&mut self) {
        self.active = self.initial.clone();
        self.history.restart(self.active.clone());
    }

    /// All state names, in the table's insertion order.
    pub fn states(&self) -> Vec<&str> {
        self.table.names().collect()
    }

    /// State names whose transition table contains `event`, in the
    /// table's insertion order.
    ///
    /// # Errors
    ///
    /// [`MachineError::MissingTransitionTable`] as soon as the scan
    /// reaches a state that declares no transition table at all. Note the
    /// asymmetry with [`trigger`](Machine::trigger), which tolerates the
    /// same condition.
    pub fn states_for(&self, event: &str) -> Result<Vec<&str>, MachineError> {
        let mut matching = Vec::new();
        for (name, def) in self.table.iter() {
            match def.handles(event) {
                Some(true) => matching.push(name),
                Some(false) => {}
                None => {
                    return Err(MachineError::MissingTransitionTable(name.to_string()))
                }
            }
        }
        Ok(matching)
    }

    /// Step back to the previous history entry.
    ///
    /// Returns `false` (and changes nothing) when there is no earlier
    /// entry.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(state) => {
                self.active = state.to_string();
                true
            }
            None => false,
        }
    }

    /// Step forward to the next history entry.
    ///
    /// Returns `false` (and changes nothing) when there is no later
    /// entry.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(state) => {
                self.active = state.to_string();
                true
            }
            None => false,
        }
    }

    /// Forget all past and future history entries.
    ///
    /// The active state is untouched and becomes the history's only
    /// entry.
    pub fn clear_history(&mut self) {
        self.history.restart(self.active.clone());
    }

    /// The history entries, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Index of the active entry within [`history`](Machine::history).
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Whether [`undo`](Machine::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Machine::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
