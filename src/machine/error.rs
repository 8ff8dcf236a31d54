//! Engine errors.

use thiserror::Error;

/// Errors raised by machine operations.
///
/// Every error leaves the machine's observable state (active state,
/// history entries, cursor) exactly as it was before the failing call, so
/// callers may retry with corrected input.
///
/// Exhausted undo/redo is not an error: those operations report
/// availability through their `bool` return value instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The requested target state is not a member of the state table.
    #[error("unknown state `{0}`")]
    InvalidState(String),

    /// The active state has a transition table, but no entry for the
    /// requested event.
    #[error("state `{state}` has no transition for event `{event}`")]
    UnknownTransition {
        /// State the event was triggered from.
        state: String,
        /// The event that had no mapping.
        event: String,
    },

    /// A filtered state query touched a state that declares no transition
    /// table at all.
    #[error("state `{0}` has no transition table")]
    MissingTransitionTable(String),
}
