//! Info command implementation.
//!
//! The `cotainr info` command will eventually report the state of the
//! dependencies needed for building containers (runtime versions, network
//! access, disk space). None of that reporting exists yet.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
#[derive(Debug, Default)]
pub struct InfoCommand;

impl InfoCommand {
    /// Create a new info command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Sorry, no information about your system is available at this time.");
        Ok(CommandResult::success())
    }
}
