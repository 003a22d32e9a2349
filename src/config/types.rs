//! Configuration types

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::value_objects::{DeployTarget, Environment};
use crate::error::ConfigError;

/// Deploy configuration (the whole JSON file)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeployConfig {
    /// Environment name → bucket/distribution
    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentConfig>,
}

/// One `environments.<name>` block
///
/// Fields are optional here so that a missing field is reported as such
/// instead of as a JSON shape error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub bucket_url: Option<String>,
    #[serde(default)]
    pub cf_distro: Option<String>,
}

impl DeployConfig {
    /// Resolve an environment into a deploy target.
    ///
    /// `path` is only used for error messages.
    pub fn target_for(
        &self,
        environment: Environment,
        path: &Path,
    ) -> Result<DeployTarget, ConfigError> {
        let block = self
            .environments
            .get(environment.config_key())
            .ok_or_else(|| ConfigError::MissingEnvironment {
                environment,
                path: path.to_path_buf(),
            })?;

        let bucket_url = required(&block.bucket_url, environment, "bucket_url", path)?;
        let cf_distro = required(&block.cf_distro, environment, "cf_distro", path)?;

        Ok(DeployTarget::new(environment, bucket_url, cf_distro))
    }
}

fn required<'a>(
    value: &'a Option<String>,
    environment: Environment,
    field: &'static str,
    path: &Path,
) -> Result<&'a str, ConfigError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField {
            environment,
            field,
            path: path.to_path_buf(),
        }),
    }
}

impl DeployConfig {
    /// Load from a JSON file, collecting unknown keys as warnings
    pub fn load_with_warnings(
        path: &Path,
    ) -> Result<(Self, Vec<crate::domain::value_objects::ConfigWarning>), ConfigError> {
        super::loader::load_with_warnings(path)
    }

    /// Load from a JSON file, ignoring warnings
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }
}
