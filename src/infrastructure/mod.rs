//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system lookups
//! - `config/` - JSON config repository
//! - `sync/` - `aws s3` transfers
//! - `cdn/` - CloudFront invalidations
//! - `events/` - Console and NDJSON event sinks

pub mod cdn;
pub mod clock;
pub mod config;
pub mod events;
pub mod fs;
pub mod sync;

// Re-export for convenience
pub use cdn::CloudFrontInvalidator;
pub use clock::SystemClock;
pub use config::JsonConfigRepository;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use sync::{AwsCli, AWS_BIN_ENV};
