//! Conda environment packing.
//!
//! Everything needed to put a working Conda environment inside a writable
//! sandbox: fail-fast validation of the user-supplied `environment.yml`,
//! bootstrapping a conda installation in the sandbox, and running conda
//! commands inside it. Environment solving itself is conda's job.

pub mod conda;
pub mod environment;

pub use conda::{CondaInstall, EnvironmentInstaller};
pub use environment::{read_environment_file, EnvironmentSpec};
