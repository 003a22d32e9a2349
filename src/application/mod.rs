//! Application Layer
//!
//! Use cases that orchestrate domain ports.

pub mod deploy;

pub use deploy::{DeployOptions, DeployReport, DeployUseCase};
