//! Config repository port - abstracts loading the deploy configuration.

use std::path::Path;

use crate::config::DeployConfig;
use crate::domain::value_objects::ConfigWarning;
use crate::error::ConfigError;

/// Repository trait for the deploy configuration.
pub trait ConfigRepository {
    /// Load configuration, collecting warnings about unknown keys.
    fn load_with_warnings(
        &self,
        path: &Path,
    ) -> Result<(DeployConfig, Vec<ConfigWarning>), ConfigError>;
}
