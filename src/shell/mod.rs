//! External process execution.

pub mod command;

pub use command::{binary_available, run, run_checked, CommandOptions, CommandOutput};
