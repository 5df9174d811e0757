//! cotainr CLI entry point.

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use cotainr::cli::{Cli, CommandDispatcher};
use cotainr::ui::{ConsoleUi, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable; the
/// default is INFO for this crate. Logs go to stderr so that command output
/// on stdout stays clean.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cotainr=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("cotainr starting with args: {:?}", cli);

    let mut ui = ConsoleUi::new();
    let dispatcher = CommandDispatcher::new();

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            let mut source = e.source();
            while let Some(cause) = source {
                ui.error(&format!("  caused by: {}", cause));
                source = cause.source();
            }
            ExitCode::from(1)
        }
    }
}
