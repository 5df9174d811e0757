//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`ConsoleUi`] for terminal usage
//! - [`MockUi`] for capturing output in tests
//! - [`ProgressSpinner`] for long-running external tool invocations

pub mod mock;
pub mod output;
pub mod spinner;

pub use mock::MockUi;
pub use output::ConsoleUi;
pub use spinner::ProgressSpinner;

/// Trait for user-facing output.
///
/// Subcommands write through this trait so tests can capture their output
/// verbatim.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
