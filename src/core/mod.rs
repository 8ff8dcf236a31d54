//! Core data model for the engine.
//!
//! This module contains the engine's two sub-models:
//! - the static side: [`StateTable`] and its per-state [`StateDef`]s,
//!   immutable once a machine is constructed;
//! - the dynamic side: [`History`], the mutable undo/redo log.
//!
//! [`MachineConfig`] ties the two together as the construction input.

mod history;
mod table;

pub use history::History;
pub use table::{MachineConfig, StateDef, StateTable};
