//! The engine: the [`Machine`] type and its errors.

mod engine;
mod error;

pub use engine::Machine;
pub use error::MachineError;
