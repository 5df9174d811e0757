//! Error types for cotainr operations.
//!
//! This module defines [`CotainrError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CotainrError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CotainrError::Other`) for unexpected errors
//! - Errors are never caught inside the orchestration layer; they propagate
//!   to `main`, which reports them and exits non-zero

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cotainr operations.
#[derive(Debug, Error)]
pub enum CotainrError {
    /// Neither `apptainer` nor `singularity` is available on PATH.
    #[error("No container runtime found: install apptainer or singularity and make sure it is on PATH")]
    RuntimeNotFound,

    /// External command exited non-zero or could not be run.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The supplied Conda environment file does not exist.
    #[error("Conda environment file not found: {path}")]
    CondaEnvNotFound { path: PathBuf },

    /// The supplied Conda environment file is not valid YAML.
    #[error("Failed to parse Conda environment file {path}: {message}")]
    CondaEnvParseError { path: PathBuf, message: String },

    /// Failed to download the conda bootstrap installer.
    #[error("Failed to download {url}: {message}")]
    DownloadFailed { url: String, message: String },

    /// A declared CLI argument has no entry in its command's help table.
    #[error("No help text registered for argument '{name}' of the '{command}' command")]
    MissingArgDescription { command: String, name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cotainr operations.
pub type Result<T> = std::result::Result<T, CotainrError>;
