//! Fluent construction of machines.

mod error;
mod machine;

pub use error::BuildError;
pub use machine::MachineBuilder;
