//! Conda `environment.yml` parsing.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CotainrError, Result};

/// The subset of a Conda `environment.yml` cotainr cares about.
///
/// Parsed only to fail fast on a missing or malformed file before the
/// expensive sandbox build starts; any `name:` in the file is ignored later
/// since the installed environment gets a fixed name.
#[derive(Debug, Default, Deserialize)]
pub struct EnvironmentSpec {
    /// Environment name declared in the file, if any.
    pub name: Option<String>,

    /// Conda channels to install from.
    #[serde(default)]
    pub channels: Vec<String>,

    /// Dependency entries; strings or nested mappings (e.g. a `pip:` block).
    #[serde(default)]
    pub dependencies: Vec<serde_yaml::Value>,
}

/// Read and validate a Conda environment file.
pub fn read_environment_file(path: &Path) -> Result<EnvironmentSpec> {
    if !path.is_file() {
        return Err(CotainrError::CondaEnvNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    let spec: EnvironmentSpec =
        serde_yaml::from_str(&text).map_err(|err| CotainrError::CondaEnvParseError {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    tracing::debug!(
        name = ?spec.name,
        channels = spec.channels.len(),
        dependencies = spec.dependencies.len(),
        "parsed conda environment file"
    );
    Ok(spec)
}
