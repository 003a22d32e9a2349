//! JSON-based configuration repository implementation.

use std::path::Path;

use crate::config::{ConfigWarning, DeployConfig};
use crate::domain::ports::ConfigRepository;
use crate::error::ConfigError;

/// JSON configuration repository implementation.
///
/// Delegates to `DeployConfig::load_with_warnings`, providing a trait-based
/// abstraction for dependency injection.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfigRepository;

impl JsonConfigRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load_with_warnings(
        &self,
        path: &Path,
    ) -> Result<(DeployConfig, Vec<ConfigWarning>), ConfigError> {
        DeployConfig::load_with_warnings(path)
    }
}
