//! Conda bootstrap and command execution inside a sandbox.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::container::ContainerRuntime;
use crate::error::{CotainrError, Result};
use crate::shell::{self, CommandOptions};
use crate::ui::spinner::with_spinner;

/// Prefix conda is installed under inside the sandbox.
const CONDA_ROOT: &str = "/opt/conda";

/// Conda's profile script; sourcing it makes `conda activate` available.
const CONDA_PROFILE_SCRIPT: &str = "/opt/conda/etc/profile.d/conda.sh";

/// The environment-install operations the build orchestration runs against.
///
/// [`CondaInstall`] is the real implementation; tests substitute a
/// recording mock.
pub trait EnvironmentInstaller {
    /// Run a shell command inside the sandbox with conda available.
    fn run_command(&self, shell_command: &str) -> Result<()>;

    /// Startup-environment line that makes the conda runtime usable in the
    /// final container.
    fn runtime_bootstrap_script(&self) -> String;

    /// Remove files only needed during installation.
    fn cleanup_unused_files(&mut self) -> Result<()>;
}

/// A conda installation bootstrapped into a writable sandbox.
///
/// Construction downloads the Miniforge installer matching the host
/// platform and runs it inside the sandbox with prefix [`CONDA_ROOT`].
pub struct CondaInstall {
    runtime: ContainerRuntime,
    sandbox_dir: PathBuf,
    installer: Option<NamedTempFile>,
}

impl CondaInstall {
    /// Bootstrap conda inside the sandbox rooted at `sandbox_dir`.
    pub fn new(sandbox_dir: &Path) -> Result<Self> {
        let runtime = ContainerRuntime::detect()?;
        let url = miniforge_installer_url();
        let installer = with_spinner(
            "Downloading conda installer",
            "Conda installer downloaded",
            || download_installer(&url),
        )?;
        let installer_path = installer.path().to_path_buf();

        let install = Self {
            runtime,
            sandbox_dir: sandbox_dir.to_path_buf(),
            installer: Some(installer),
        };
        install.bootstrap(&installer_path)?;
        Ok(install)
    }

    /// Run the downloaded installer inside the writable sandbox.
    fn bootstrap(&self, installer_path: &Path) -> Result<()> {
        tracing::info!(
            installer = %installer_path.display(),
            prefix = CONDA_ROOT,
            "bootstrapping conda in the sandbox"
        );

        let args: Vec<OsString> = vec![
            "exec".into(),
            "--writable".into(),
            self.sandbox_dir.as_path().into(),
            "bash".into(),
            installer_path.into(),
            "-b".into(),
            "-s".into(),
            "-p".into(),
            CONDA_ROOT.into(),
        ];
        with_spinner("Bootstrapping conda in the sandbox", "Conda bootstrapped", || {
            shell::run_checked(self.runtime.executable(), &args, &self.capture_options())
        })?;
        Ok(())
    }

    /// Argv for running `shell_command` inside the sandbox with the conda
    /// profile sourced first.
    fn containerized_command(&self, shell_command: &str) -> Vec<OsString> {
        vec![
            "exec".into(),
            "--writable".into(),
            self.sandbox_dir.as_path().into(),
            "bash".into(),
            "-c".into(),
            format!("source {CONDA_PROFILE_SCRIPT} && {shell_command}").into(),
        ]
    }

    fn capture_options(&self) -> CommandOptions {
        CommandOptions {
            capture_output: true,
            ..Default::default()
        }
    }
}

impl EnvironmentInstaller for CondaInstall {
    fn run_command(&self, shell_command: &str) -> Result<()> {
        tracing::info!(command = shell_command, "running conda command in the sandbox");
        let args = self.containerized_command(shell_command);
        with_spinner(
            &format!("Running {shell_command}"),
            &format!("Finished {shell_command}"),
            || shell::run_checked(self.runtime.executable(), &args, &self.capture_options()),
        )?;
        Ok(())
    }

    fn runtime_bootstrap_script(&self) -> String {
        format!("source {CONDA_PROFILE_SCRIPT}")
    }

    fn cleanup_unused_files(&mut self) -> Result<()> {
        self.run_command("conda clean -y -a")?;
        if let Some(installer) = self.installer.take() {
            installer.close()?;
        }
        Ok(())
    }
}

/// URL of the Miniforge installer matching the host OS and architecture.
fn miniforge_installer_url() -> String {
    let os = match std::env::consts::OS {
        "macos" => "MacOSX",
        _ => "Linux",
    };
    let arch = match std::env::consts::ARCH {
        "aarch64" => "aarch64",
        "powerpc64" => "ppc64le",
        _ => "x86_64",
    };
    format!(
        "https://github.com/conda-forge/miniforge/releases/latest/download/Miniforge3-{os}-{arch}.sh"
    )
}

/// Download the installer to a scoped temporary file.
fn download_installer(url: &str) -> Result<NamedTempFile> {
    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|err| CotainrError::DownloadFailed {
            url: url.to_string(),
            message: err.to_string(),
        })?;
    let bytes = response.bytes().map_err(|err| CotainrError::DownloadFailed {
        url: url.to_string(),
        message: err.to_string(),
    })?;

    let mut installer = tempfile::Builder::new()
        .prefix("cotainr_miniforge_")
        .suffix(".sh")
        .tempfile()?;
    installer.write_all(&bytes)?;
    Ok(installer)
}
