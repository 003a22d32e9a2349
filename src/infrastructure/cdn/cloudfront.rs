//! CloudFront Invalidator
//!
//! Implements `CdnInvalidator` with the AWS SDK. The SDK is async; this
//! adapter owns a current-thread runtime and blocks on each call.

use aws_config::default_provider::region::DefaultRegionChain;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_cloudfront::error::DisplayErrorContext;
use aws_sdk_cloudfront::types::{InvalidationBatch, Paths};
use aws_sdk_cloudfront::Client;
use tokio::runtime::Runtime;

use crate::domain::ports::{CdnInvalidator, InvalidationError};
use crate::domain::value_objects::InvalidationRequest;

/// CloudFront is global; signing still needs a region when the profile has none
const FALLBACK_REGION: &str = "us-east-1";

pub struct CloudFrontInvalidator {
    profile: String,
    runtime: Runtime,
}

impl CloudFrontInvalidator {
    /// Create an invalidator using the given shared-credentials profile.
    ///
    /// Credentials are resolved lazily on the first request.
    pub fn new(profile: impl Into<String>) -> Result<Self, InvalidationError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| InvalidationError::Setup(e.to_string()))?;

        Ok(Self {
            profile: profile.into(),
            runtime,
        })
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    async fn client(&self) -> Client {
        let region = RegionProviderChain::first_try(
            DefaultRegionChain::builder()
                .profile_name(&self.profile)
                .build(),
        )
        .or_else(FALLBACK_REGION);

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(&self.profile)
            .region(region)
            .load()
            .await;

        Client::new(&shared_config)
    }

    async fn create_invalidation(
        &self,
        request: &InvalidationRequest,
    ) -> Result<String, InvalidationError> {
        let batch = invalidation_batch(request)?;

        let response = self
            .client()
            .await
            .create_invalidation()
            .distribution_id(request.distribution_id())
            .invalidation_batch(batch)
            .send()
            .await
            .map_err(|e| InvalidationError::Service {
                message: DisplayErrorContext(&e).to_string(),
                source: Box::new(e),
            })?;

        response
            .invalidation()
            .map(|invalidation| invalidation.id().to_string())
            .ok_or(InvalidationError::MissingId)
    }
}

/// Build the `InvalidationBatch` body for a request
fn invalidation_batch(
    request: &InvalidationRequest,
) -> Result<InvalidationBatch, InvalidationError> {
    let items = request.paths().to_vec();
    let quantity = i32::try_from(items.len())
        .map_err(|_| InvalidationError::InvalidRequest("too many paths".to_string()))?;

    let paths = Paths::builder()
        .quantity(quantity)
        .set_items(Some(items))
        .build()
        .map_err(|e| InvalidationError::InvalidRequest(e.to_string()))?;

    InvalidationBatch::builder()
        .paths(paths)
        .caller_reference(request.caller_reference().as_str())
        .build()
        .map_err(|e| InvalidationError::InvalidRequest(e.to_string()))
}

impl CdnInvalidator for CloudFrontInvalidator {
    fn invalidate(&self, request: &InvalidationRequest) -> Result<String, InvalidationError> {
        self.runtime.block_on(self.create_invalidation(request))
    }
}
