//! Console output implementation.

use console::style;

use super::UserInterface;

/// Terminal implementation of [`UserInterface`].
///
/// Plain messages go to stdout unstyled so that output pinned by tests
/// (e.g. the `info` subcommand's line) stays byte-exact; success and error
/// markers are styled and `console` drops the styling automatically when the
/// stream is not a terminal or `NO_COLOR` is set.
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    /// Create a new console UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for ConsoleUi {
    fn message(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn success(&mut self, msg: &str) {
        println!("{} {msg}", style("✓").green());
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {msg}", style("✗").red());
    }
}
