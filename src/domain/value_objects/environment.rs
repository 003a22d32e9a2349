//! Environment value object - selects a block of the deploy config

use serde::{Deserialize, Serialize};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Staging
    Stag,
    /// Production
    Prod,
}

impl Environment {
    /// All environments, in display order
    pub const ALL: [Environment; 2] = [Environment::Stag, Environment::Prod];

    /// Key used for this environment under `environments` in the config file
    pub fn config_key(&self) -> &'static str {
        match self {
            Environment::Stag => "stag",
            Environment::Prod => "prod",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.config_key())
    }
}
