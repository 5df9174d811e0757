//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros. The
//! main entry point is the [`Cli`] struct. Help strings for `build`'s
//! arguments come from the declarative table in [`crate::cli::help`];
//! path-typed arguments are normalized to absolute paths during parsing, so
//! commands are always constructed with absolute paths.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::help::BUILD_HELP;

/// Build Apptainer/Singularity containers for HPC systems in user space.
#[derive(Debug, Parser)]
#[command(name = "cotainr")]
#[command(version, about = "Build Apptainer/Singularity containers for HPC systems in user space.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
///
/// The enum is the static subcommand registry: names are the lower-cased
/// variant names and each variant's doc comment is its one-line summary in
/// help output.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a container.
    // Explicit about strings: clap would strip the trailing period from a
    // doc-comment summary, and these lines are shown verbatim.
    #[command(about = "Build a container.")]
    Build(BuildArgs),

    /// Obtain info about the state of all required dependencies for building a container.
    #[command(
        about = "Obtain info about the state of all required dependencies for building a container."
    )]
    Info(InfoArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BuildArgs {
    #[arg(value_parser = absolute_path, help = BUILD_HELP.help("image_path"))]
    pub image_path: PathBuf,

    #[arg(long, required = true, help = BUILD_HELP.help("base_image"))]
    pub base_image: String,

    #[arg(long, value_parser = absolute_path, help = BUILD_HELP.help("conda_env"))]
    pub conda_env: Option<PathBuf>,
}

/// Arguments for the `info` command (none).
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {}

/// Normalize a path argument to an absolute path.
///
/// The path need not exist (the image path usually does not yet), so this
/// resolves against the current directory without touching the filesystem.
fn absolute_path(value: &str) -> std::io::Result<PathBuf> {
    std::path::absolute(value)
}
