//! Container runtime detection.

use std::fmt;

use crate::error::{CotainrError, Result};
use crate::shell;

/// The container build tool driven by cotainr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerRuntime {
    Apptainer,
    Singularity,
}

impl ContainerRuntime {
    /// Name of the runtime executable.
    pub fn executable(self) -> &'static str {
        match self {
            Self::Apptainer => "apptainer",
            Self::Singularity => "singularity",
        }
    }

    /// Detect an available runtime, preferring `apptainer` over its
    /// `singularity` predecessor.
    pub fn detect() -> Result<Self> {
        for runtime in [Self::Apptainer, Self::Singularity] {
            if shell::binary_available(runtime.executable()) {
                tracing::debug!(runtime = %runtime, "detected container runtime");
                return Ok(runtime);
            }
        }
        Err(CotainrError::RuntimeNotFound)
    }
}

impl fmt::Display for ContainerRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}
