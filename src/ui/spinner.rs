//! Progress spinner for long-running external tool invocations.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;

/// A spinner shown while an external tool (sandbox build, conda install,
/// image build) runs to completion.
///
/// Rendered on stderr; indicatif hides it automatically when stderr is not
/// a terminal, so captured test output stays clean.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .expect("spinner template is valid"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Finish the spinner, keeping a success line.
    pub fn finish_success(self, msg: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").expect("spinner template is valid"));
        self.bar
            .finish_with_message(format!("{} {msg}", style("✓").green()));
    }

    /// Finish the spinner, clearing its line (the caller reports the error).
    pub fn finish_and_clear(self) {
        self.bar.finish_and_clear();
    }
}

/// Run `op` behind a spinner: keep a success line when it returns `Ok`,
/// clear the spinner and pass the error through when it returns `Err`.
pub fn with_spinner<T>(message: &str, done: &str, op: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = ProgressSpinner::new(message);
    match op() {
        Ok(value) => {
            spinner.finish_success(done);
            Ok(value)
        }
        Err(err) => {
            spinner.finish_and_clear();
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CotainrError;

    #[test]
    fn with_spinner_passes_value_through() {
        let value = with_spinner("working", "done", || Ok(42)).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn with_spinner_passes_error_through() {
        let err = with_spinner("working", "done", || -> Result<()> {
            Err(CotainrError::RuntimeNotFound)
        })
        .unwrap_err();
        assert!(matches!(err, CotainrError::RuntimeNotFound));
    }

    #[test]
    fn spinner_lifecycle_does_not_panic() {
        let spinner = ProgressSpinner::new("working");
        spinner.finish_success("done");

        let spinner = ProgressSpinner::new("working");
        spinner.finish_and_clear();
    }
}
