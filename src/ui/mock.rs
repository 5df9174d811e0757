//! Mock UI implementation for testing.
//!
//! `MockUi` implements the [`UserInterface`] trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use cotainr::ui::{MockUi, UserInterface};
//!
//! let mut ui = MockUi::new();
//! ui.message("building image");
//! assert_eq!(ui.messages(), ["building image"]);
//! ```

use super::UserInterface;

/// Mock UI implementation that records every message.
#[derive(Debug, Default)]
pub struct MockUi {
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
}

impl MockUi {
    /// Create a new mock UI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages captured so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success messages captured so far.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Error messages captured so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUi {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
