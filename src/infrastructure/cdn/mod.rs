//! CDN Invalidator Implementations

mod cloudfront;

pub use cloudfront::CloudFrontInvalidator;
