//! sitepush - static site deploy tool
//!
//! Mirrors a fixed set of site assets from a local project directory into an
//! S3 bucket with the `aws` CLI, re-uploads the entry page with no-cache
//! headers, and asks CloudFront to invalidate every cached path.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase};
pub use config::{DeployConfig, EnvironmentConfig};
pub use domain::value_objects::{DeployTarget, Environment};
pub use error::{ConfigError, DeployError, DeployResult};
