//! Linear undo/redo history of visited states.
//!
//! The history is an ordered log of every state made active through a
//! validated change, plus a cursor marking the currently active entry.
//! Moving the cursor backwards and forwards implements undo/redo; a fresh
//! forward move from a non-tail position discards the abandoned future
//! (branch truncation).

use serde::{Deserialize, Serialize};

/// Ordered log of visited state names with a cursor into it.
///
/// Invariants, maintained by every method:
///
/// - the log is never empty;
/// - `cursor` always indexes a valid entry;
/// - `entries()[cursor()]` is the currently active state.
///
/// # Example
///
/// ```rust
/// use flowstate::core::History;
///
/// let mut history = History::new("A");
/// history.record("B".to_string());
/// history.record("C".to_string());
///
/// assert_eq!(history.current(), "C");
/// assert_eq!(history.undo(), Some("B"));
/// assert_eq!(history.undo(), Some("A"));
/// assert_eq!(history.undo(), None);
/// assert_eq!(history.redo(), Some("B"));
///
/// // A fresh move from here abandons the redo future, dropping the
/// // entry under the cursor along with it.
/// history.record("A".to_string());
/// assert_eq!(history.entries(), ["A", "A"]);
/// assert_eq!(history.redo(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Create a history containing a single entry with the cursor on it.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Record a fresh forward move.
    ///
    /// When the cursor sits before the tail, the abandoned future is
    /// discarded, including the entry under the cursor, before the state
    /// is appended. The cursor lands on the appended entry.
    pub fn record(&mut self, state: String) {
        if self.cursor + 1 < self.entries.len() {
            self.entries.truncate(self.cursor);
        }
        self.entries.push(state);
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back one entry.
    ///
    /// Returns the new current entry, or `None` (without mutating) when
    /// the cursor is already at the oldest entry.
    pub fn undo(&mut self) -> Option<&str> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Some(&self.entries[self.cursor])
        } else {
            None
        }
    }

    /// Step the cursor forward one entry.
    ///
    /// Returns the new current entry, or `None` (without mutating) when
    /// there are no entries beyond the cursor.
    pub fn redo(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            Some(&self.entries[self.cursor])
        } else {
            None
        }
    }

    /// Collapse the log to a single entry, discarding past and future.
    pub fn restart(&mut self, state: String) {
        self.entries.clear();
        self.entries.push(state);
        self.cursor = 0;
    }

    /// Whether a backward step is available.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a forward step is available.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
