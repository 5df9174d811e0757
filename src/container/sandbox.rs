//! Writable container sandboxes.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

use crate::error::Result;
use crate::shell::{self, CommandOptions};
use crate::ui::spinner::with_spinner;

use super::runtime::ContainerRuntime;

/// Relative path of the startup-environment hook inside a sandbox.
///
/// Numbered scripts under `.singularity.d/env/` are sourced by the runtime
/// when a container starts, so lines appended here run before the user's
/// process.
const ENV_HOOK_FILE: &str = ".singularity.d/env/92-cotainr-env.sh";

/// The sandbox operations the build orchestration runs against.
///
/// [`ApptainerSandbox`] is the real implementation; tests substitute a
/// recording mock.
pub trait Sandbox {
    /// Root directory of the sandbox filesystem tree.
    fn sandbox_dir(&self) -> &Path;

    /// Append a startup-environment directive to the sandbox.
    fn add_to_env(&mut self, line: &str) -> Result<()>;

    /// Finalize the sandbox into an image at `image_path`.
    fn build_image(&self, image_path: &Path) -> Result<()>;
}

/// A writable sandbox backed by a scoped temporary directory.
///
/// Dropping the value removes the backing directory, so sandbox resources
/// are released on every exit path.
pub struct ApptainerSandbox {
    runtime: ContainerRuntime,
    // Kept in the current working directory so the sandbox shares a
    // filesystem with the final image path in the common case.
    base_dir: TempDir,
}

impl ApptainerSandbox {
    /// Build a new sandbox from `base_image`, which may be any build spec
    /// the runtime accepts (`docker://...`, a `.sif` file, a definition
    /// file, ...).
    pub fn create(base_image: &str) -> Result<Self> {
        let runtime = ContainerRuntime::detect()?;
        let base_dir = tempfile::Builder::new()
            .prefix("cotainr_sandbox_")
            .tempdir_in(std::env::current_dir()?)?;

        tracing::info!(%runtime, base_image, sandbox_dir = %base_dir.path().display(), "creating container sandbox");
        let args: Vec<OsString> = vec![
            "build".into(),
            "--force".into(),
            "--sandbox".into(),
            base_dir.path().into(),
            base_image.into(),
        ];
        with_spinner(
            &format!("Creating container sandbox from {base_image}"),
            "Container sandbox created",
            || {
                shell::run_checked(
                    runtime.executable(),
                    &args,
                    &CommandOptions {
                        capture_output: true,
                        ..Default::default()
                    },
                )
            },
        )?;

        Ok(Self { runtime, base_dir })
    }

    /// The runtime this sandbox was built with.
    pub fn runtime(&self) -> ContainerRuntime {
        self.runtime
    }
}

impl Sandbox for ApptainerSandbox {
    fn sandbox_dir(&self) -> &Path {
        self.base_dir.path()
    }

    fn add_to_env(&mut self, line: &str) -> Result<()> {
        append_env_line(self.base_dir.path(), line)
    }

    fn build_image(&self, image_path: &Path) -> Result<()> {
        tracing::info!(image_path = %image_path.display(), "building container image");
        let args: Vec<OsString> = vec![
            "build".into(),
            "--force".into(),
            image_path.into(),
            self.base_dir.path().into(),
        ];
        with_spinner(
            &format!("Building container image {}", image_path.display()),
            "Container image built",
            || {
                shell::run_checked(
                    self.runtime.executable(),
                    &args,
                    &CommandOptions {
                        capture_output: true,
                        ..Default::default()
                    },
                )
            },
        )?;
        Ok(())
    }
}

/// Append one line to the sandbox's startup-environment hook, creating the
/// hook file on first use.
fn append_env_line(sandbox_dir: &Path, line: &str) -> Result<()> {
    let hook_path = sandbox_dir.join(ENV_HOOK_FILE);
    if let Some(parent) = hook_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut hook = OpenOptions::new().create(true).append(true).open(&hook_path)?;
    writeln!(hook, "{line}")?;
    tracing::debug!(line, hook = %hook_path.display(), "added startup environment directive");
    Ok(())
}

/// Read the sandbox's startup-environment hook, if present.
#[cfg(test)]
fn read_env_hook(sandbox_dir: &Path) -> std::io::Result<String> {
    fs::read_to_string(sandbox_dir.join(ENV_HOOK_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_env_line_creates_hook_file() {
        let dir = tempfile::TempDir::new().unwrap();
        append_env_line(dir.path(), "source /opt/conda/etc/profile.d/conda.sh").unwrap();

        let hook = read_env_hook(dir.path()).unwrap();
        assert_eq!(hook, "source /opt/conda/etc/profile.d/conda.sh\n");
    }

    #[test]
    fn append_env_line_appends_in_order() {
        let dir = tempfile::TempDir::new().unwrap();
        append_env_line(dir.path(), "source /opt/conda/etc/profile.d/conda.sh").unwrap();
        append_env_line(dir.path(), "conda activate conda_container_env").unwrap();

        let hook = read_env_hook(dir.path()).unwrap();
        assert_eq!(
            hook,
            "source /opt/conda/etc/profile.d/conda.sh\nconda activate conda_container_env\n"
        );
    }

    #[test]
    fn env_hook_lives_under_singularity_env_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        append_env_line(dir.path(), "export FOO=bar").unwrap();
        assert!(dir
            .path()
            .join(".singularity.d/env/92-cotainr-env.sh")
            .is_file());
    }
}
