//! Object Uploader Port
//!
//! Abstracts a single-object upload with cache-control metadata (`aws s3 cp`).

use std::path::PathBuf;

use super::mirror::{SyncError, TransferOutput};

/// Cache-control that forces clients and intermediaries to revalidate
pub const NO_CACHE: &str = "max-age=0, no-cache, no-store, must-revalidate";

/// One upload call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Local file to upload
    pub source: PathBuf,
    /// Full remote object location
    pub destination: String,
    /// Value for the object's Cache-Control metadata
    pub cache_control: Option<String>,
}

impl UploadRequest {
    /// Upload a file that must always be revalidated
    pub fn no_cache(source: impl Into<PathBuf>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            cache_control: Some(NO_CACHE.to_string()),
        }
    }
}

/// Trait for uploading one object
pub trait ObjectUploader {
    fn upload(&self, request: &UploadRequest) -> Result<TransferOutput, SyncError>;
}
