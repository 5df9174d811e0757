//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. The no-subcommand case is an
//! explicit dispatch outcome (top-level help), not an error.

pub mod build;
pub mod dispatcher;
pub mod info;

pub use build::BuildCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use info::InfoCommand;
