//! Container sandbox lifecycle.
//!
//! A sandbox is a writable staging filesystem tree built from a base image;
//! it is mutated in place (e.g. by installing a Conda environment into it)
//! and then finalized into an immutable image artifact. The backing
//! directory is a scoped temporary directory removed on every exit path.

pub mod runtime;
pub mod sandbox;

pub use runtime::ContainerRuntime;
pub use sandbox::{ApptainerSandbox, Sandbox};
