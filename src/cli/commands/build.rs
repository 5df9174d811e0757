//! Build command implementation.
//!
//! The `cotainr build` command turns a base image into a finished container
//! image, optionally installing a Conda environment into the sandbox before
//! it is finalized. The sequence is fixed: create a sandbox from the base
//! image, (if requested) create the Conda environment inside it and register
//! its activation in the sandbox's startup environment, then build the image
//! from the sandbox. The sandbox's backing directory is removed on every
//! exit path, including failures part-way through.

use std::path::Path;

use crate::cli::args::BuildArgs;
use crate::container::{ApptainerSandbox, Sandbox};
use crate::error::Result;
use crate::pack::{self, CondaInstall, EnvironmentInstaller};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Name given to the Conda environment installed into the container.
///
/// Fixed rather than taken from the environment file, so the activation
/// line registered in the startup environment always matches.
pub const CONDA_ENV_NAME: &str = "conda_container_env";

/// The build command implementation.
pub struct BuildCommand {
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    ///
    /// `args` paths are already absolute; the argument parser normalizes
    /// them before construction.
    pub fn new(args: BuildArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &BuildArgs {
        &self.args
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Validate the environment file before the expensive sandbox build.
        if let Some(env_file) = &self.args.conda_env {
            pack::read_environment_file(env_file)?;
        }

        let sandbox = ApptainerSandbox::create(&self.args.base_image)?;
        run_build(
            sandbox,
            self.args.conda_env.as_deref(),
            CondaInstall::new,
            &self.args.image_path,
        )?;

        ui.success(&format!(
            "Built container image {}",
            self.args.image_path.display()
        ));
        Ok(CommandResult::success())
    }
}

/// Provision the sandbox and finalize the image.
///
/// Takes the sandbox by value: it is dropped (and its backing directory
/// removed) on every exit path, whether provisioning succeeds or fails.
fn run_build<S, I, F>(
    mut sandbox: S,
    conda_env: Option<&Path>,
    new_installer: F,
    image_path: &Path,
) -> Result<()>
where
    S: Sandbox,
    I: EnvironmentInstaller,
    F: FnOnce(&Path) -> Result<I>,
{
    if let Some(env_file) = conda_env {
        // Install supplied conda env
        let mut installer = new_installer(sandbox.sandbox_dir())?;
        installer.run_command(&format!(
            "conda env create -f {} -n {CONDA_ENV_NAME}",
            env_file.display()
        ))?;

        // Activate env on container startup
        sandbox.add_to_env(&installer.runtime_bootstrap_script())?;
        sandbox.add_to_env(&format!("conda activate {CONDA_ENV_NAME}"))?;

        // Cleanup
        installer.cleanup_unused_files()?;
    }

    sandbox.build_image(image_path)?;
    Ok(())
}
