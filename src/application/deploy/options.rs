//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::PathBuf;

use crate::domain::value_objects::Environment;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Path to the JSON deploy config
    pub config_path: PathBuf,
    /// Environment block to deploy to
    pub environment: Environment,
    /// Local root containing the site assets
    pub project_dir: PathBuf,
    /// Dry run: transfers run with `--dryrun`, no invalidation is sent
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(
        config_path: impl Into<PathBuf>,
        environment: Environment,
        project_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config_path: config_path.into(),
            environment,
            project_dir: project_dir.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
