//! Synchronous execution of external tools.
//!
//! Every invocation of `apptainer`/`singularity` goes through this module.
//! Commands are run as argv vectors, never through a shell, so paths with
//! spaces survive intact; the one place a shell is genuinely needed (running
//! conda inside the sandbox) builds its own `bash -c` argv explicitly.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{CotainrError, Result};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty when inherited).
    pub stdout: String,

    /// Captured standard error (empty when inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout/stderr (if false, the child inherits the terminal).
    pub capture_output: bool,
}

/// Render an argv vector for error messages and logs.
fn render_command(program: &str, args: &[impl AsRef<OsStr>]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&arg.as_ref().to_string_lossy());
    }
    rendered
}

/// Execute an external command.
pub fn run(program: &str, args: &[impl AsRef<OsStr>], options: &CommandOptions) -> Result<CommandOutput> {
    let start = Instant::now();
    let rendered = render_command(program, args);
    tracing::debug!(command = %rendered, "running external command");

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture_output {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|_| CotainrError::CommandFailed {
        command: rendered,
        code: None,
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_output {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_output {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}

/// Execute an external command and fail on a non-zero exit.
///
/// When output was captured, the child's stderr is echoed to our stderr
/// before returning the error, so the underlying tool's diagnostics are not
/// swallowed.
pub fn run_checked(
    program: &str,
    args: &[impl AsRef<OsStr>],
    options: &CommandOptions,
) -> Result<CommandOutput> {
    let output = run(program, args, options)?;
    if output.success {
        return Ok(output);
    }

    if options.capture_output && !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
    }
    Err(CotainrError::CommandFailed {
        command: render_command(program, args),
        code: output.exit_code,
    })
}

/// Check whether a program can be invoked at all.
///
/// Used for container runtime detection: runs `<program> --version` with
/// output captured and reports whether it ran successfully.
pub fn binary_available(program: &str) -> bool {
    let options = CommandOptions {
        capture_output: true,
        ..Default::default()
    };
    run(program, &["--version"], &options)
        .map(|output| output.success)
        .unwrap_or(false)
}
