//! Error types for sitepush
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{InvalidationError, SyncError};
use crate::domain::value_objects::Environment;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Problems with the deploy configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file missing or unreadable
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON of the expected shape
    #[error("invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// No block for the requested environment
    #[error("environment '{environment}' not found in {path}")]
    MissingEnvironment {
        environment: Environment,
        path: PathBuf,
    },

    /// Environment block lacks a required field (or it is empty)
    #[error("environment '{environment}' in {path} is missing '{field}'")]
    MissingField {
        environment: Environment,
        field: &'static str,
        path: PathBuf,
    },
}

/// Main error type for a deploy run. Every variant is fatal.
#[derive(Error, Debug)]
pub enum DeployError {
    /// Project directory does not exist or is not a directory
    #[error("project directory not found: {path}")]
    ProjectDirNotFound { path: PathBuf },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Mirroring an asset failed
    #[error("failed to sync {asset}: {source}")]
    Sync {
        asset: String,
        #[source]
        source: SyncError,
    },

    /// The no-cache entry point upload failed
    #[error("failed to upload {asset} with cache headers: {source}")]
    Upload {
        asset: String,
        #[source]
        source: SyncError,
    },

    /// The CDN rejected or failed the invalidation
    #[error("CloudFront invalidation error for {distribution_id}: {source}")]
    Invalidation {
        distribution_id: String,
        #[source]
        source: InvalidationError,
    },
}
