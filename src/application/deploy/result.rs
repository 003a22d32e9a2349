//! Deploy Report
//!
//! What a successful deploy did.

use crate::domain::value_objects::DeployTarget;

/// Result of a deploy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    /// Where the assets went
    pub target: DeployTarget,
    /// Assets that were mirrored, in order
    pub synced: Vec<String>,
    /// Assets that were absent locally
    pub skipped: Vec<String>,
    /// Whether the entry point got its no-cache re-upload
    pub entry_point_uploaded: bool,
    /// Id returned by the CDN (None in dry run)
    pub invalidation_id: Option<String>,
    pub dry_run: bool,
}

impl DeployReport {
    pub fn new(target: DeployTarget, dry_run: bool) -> Self {
        Self {
            target,
            synced: Vec::new(),
            skipped: Vec::new(),
            entry_point_uploaded: false,
            invalidation_id: None,
            dry_run,
        }
    }

    /// True when every asset was present
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
