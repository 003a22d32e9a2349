//! Invalidation request value objects
//!
//! A CDN invalidation is identified by the distribution it targets and a
//! caller reference. CloudFront treats a repeated caller reference as the
//! same request, so every run must produce a fresh one.

use chrono::{DateTime, Utc};

/// Path pattern covering every object in a distribution
pub const INVALIDATE_ALL: &str = "/*";

/// Unique token attached to an invalidation request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerReference(String);

impl CallerReference {
    /// Derive a reference from a point in time.
    ///
    /// Unix seconds followed by the zero-padded microsecond fraction, so
    /// `1730312345.000042` becomes `1730312345000042`.
    pub fn from_time(at: DateTime<Utc>) -> Self {
        let micros = at.timestamp_subsec_micros().min(999_999);
        Self(format!("{}{:06}", at.timestamp(), micros))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CallerReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request to invalidate cached paths on a distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationRequest {
    distribution_id: String,
    paths: Vec<String>,
    caller_reference: CallerReference,
}

impl InvalidationRequest {
    /// Invalidate every path (`/*`) on the distribution
    pub fn all_paths(
        distribution_id: impl Into<String>,
        caller_reference: CallerReference,
    ) -> Self {
        Self {
            distribution_id: distribution_id.into(),
            paths: vec![INVALIDATE_ALL.to_string()],
            caller_reference,
        }
    }

    pub fn distribution_id(&self) -> &str {
        &self.distribution_id
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn caller_reference(&self) -> &CallerReference {
        &self.caller_reference
    }
}
