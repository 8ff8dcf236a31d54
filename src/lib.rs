//! Flowstate: a declarative finite state machine engine with undo/redo.
//!
//! A machine is defined by a table of named states, each with named
//! event-triggered transitions to other states. The engine tracks the
//! active state, validates every move against the table, and keeps a
//! linear history of visited states so moves can be undone and redone.
//!
//! # Core Concepts
//!
//! - **State table**: the declarative `state name -> { event -> target }`
//!   mapping, fixed at construction ([`StateTable`])
//! - **Active state**: the machine's current position, read with
//!   [`Machine::state`]
//! - **History**: the ordered log of visited states with a cursor, driving
//!   [`Machine::undo`] and [`Machine::redo`]
//!
//! # Example
//!
//! ```rust
//! use flowstate::{Machine, MachineBuilder, MachineError};
//!
//! let mut machine = MachineBuilder::new()
//!     .initial("A")
//!     .transition("A", "go", "B")
//!     .transition("B", "back", "A")
//!     .transition("B", "go", "C")
//!     .state("C")
//!     .build()
//!     .unwrap();
//!
//! machine.trigger("go").unwrap();
//! machine.trigger("go").unwrap();
//! assert_eq!(machine.state(), "C");
//!
//! // "C" declares an empty transition table, so any event is rejected.
//! assert!(matches!(
//!     machine.trigger("go"),
//!     Err(MachineError::UnknownTransition { .. })
//! ));
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "B");
//!
//! // Which states handle "go"?
//! assert_eq!(machine.states_for("go").unwrap(), vec!["A", "B"]);
//! ```
//!
//! Machines can also be constructed from a JSON configuration:
//!
//! ```rust
//! use flowstate::{Machine, MachineConfig};
//!
//! let config = MachineConfig::from_json(
//!     r#"{ "states": { "on": { "transitions": { "toggle": "off" } },
//!                      "off": { "transitions": { "toggle": "on" } } },
//!          "initial": "off" }"#,
//! )
//! .unwrap();
//!
//! let mut machine = Machine::new(config);
//! machine.trigger("toggle").unwrap();
//! assert_eq!(machine.state(), "on");
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use core::{History, MachineConfig, StateDef, StateTable};
pub use machine::{Machine, MachineError};
