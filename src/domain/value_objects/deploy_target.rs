//! Deploy target value object - where an environment's assets go

use super::Environment;

/// Resolved bucket and distribution for one environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployTarget {
    environment: Environment,
    bucket_url: String,
    distribution_id: String,
}

impl DeployTarget {
    /// Create a target. Trailing slashes on the bucket URL are dropped so
    /// joined destinations never contain `//`.
    pub fn new(
        environment: Environment,
        bucket_url: impl AsRef<str>,
        distribution_id: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            bucket_url: bucket_url.as_ref().trim_end_matches('/').to_string(),
            distribution_id: distribution_id.into(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Bucket root, without a trailing slash
    pub fn bucket_url(&self) -> &str {
        &self.bucket_url
    }

    pub fn distribution_id(&self) -> &str {
        &self.distribution_id
    }

    /// Destination for an object or prefix directly under the bucket root
    pub fn destination_for(&self, name: &str) -> String {
        format!("{}/{}", self.bucket_url, name)
    }
}
