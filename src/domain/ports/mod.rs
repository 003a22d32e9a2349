//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cdn_invalidator;
pub mod clock;
pub mod config_repository;
pub mod deploy_events;
pub mod file_system;
pub mod mirror;
pub mod object_uploader;

pub use cdn_invalidator::{CdnInvalidator, InvalidationError};
pub use clock::Clock;
pub use config_repository::ConfigRepository;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink, Severity};
pub use file_system::{EntryKind, FileSystem, FsError, FsResult};
pub use mirror::{Mirror, MirrorRequest, SyncError, TransferOutput};
pub use object_uploader::{ObjectUploader, UploadRequest, NO_CACHE};
