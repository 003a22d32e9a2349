//! CDN Invalidator Port
//!
//! Abstracts the CloudFront `CreateInvalidation` call.

use crate::domain::value_objects::InvalidationRequest;
use thiserror::Error;

/// Error from an invalidation request
#[derive(Debug, Error)]
pub enum InvalidationError {
    /// The client could not be set up (credentials, profile, runtime)
    #[error("client setup failed: {0}")]
    Setup(String),

    /// The request could not be built from the given values
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The service rejected or failed the call
    #[error("{message}")]
    Service {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The service accepted the call but returned no invalidation id
    #[error("response did not include an invalidation id")]
    MissingId,
}

/// Trait for requesting CDN cache invalidations
pub trait CdnInvalidator {
    /// Submit the request and return the invalidation id.
    ///
    /// Does not wait for the invalidation to complete.
    fn invalidate(&self, request: &InvalidationRequest) -> Result<String, InvalidationError>;
}
