//! Deploy Event Port
//!
//! The deploy's logging handle. The use case reports every step as a
//! `DeployEvent` to an injected sink; sinks decide how (or whether) to
//! render it. There is no process-wide logger.

use std::path::PathBuf;

use crate::domain::entities::AssetKind;
use crate::domain::value_objects::{ConfigWarning, Environment};

/// How loud an event is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

/// Event emitted during a deploy
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Project directory validated, deploy starting
    Started {
        environment: Environment,
        project_dir: PathBuf,
        dry_run: bool,
    },

    /// Environment resolved from the config file
    TargetResolved {
        bucket_url: String,
        distribution_id: String,
    },

    /// Non-fatal problem in the config file
    ConfigWarning { warning: ConfigWarning },

    /// Asset sync started
    AssetStarted {
        index: usize,
        name: String,
        kind: AssetKind,
        source: PathBuf,
        destination: String,
    },

    /// Asset synced successfully
    AssetSynced { index: usize, name: String },

    /// Asset absent locally, nothing sent
    AssetSkipped {
        index: usize,
        name: String,
        path: PathBuf,
    },

    /// Entry point re-uploaded with no-cache headers
    EntryPointUploaded {
        destination: String,
        cache_control: String,
    },

    /// Entry point absent, no-cache upload skipped
    EntryPointMissing { path: PathBuf },

    /// Invalidation accepted by the CDN
    InvalidationSubmitted {
        distribution_id: String,
        invalidation_id: String,
        caller_reference: String,
    },

    /// Invalidation not sent (dry run)
    InvalidationSkipped { distribution_id: String },

    /// Raw output of a transfer command
    CommandOutput { output: String },

    /// Deploy finished
    Completed {
        synced_count: usize,
        skipped_count: usize,
        dry_run: bool,
    },

    /// Deploy aborted
    Failed { error: String },
}

impl DeployEvent {
    pub fn severity(&self) -> Severity {
        match self {
            DeployEvent::CommandOutput { .. } | DeployEvent::TargetResolved { .. } => {
                Severity::Debug
            }
            DeployEvent::ConfigWarning { .. }
            | DeployEvent::AssetSkipped { .. }
            | DeployEvent::EntryPointMissing { .. }
            | DeployEvent::InvalidationSkipped { .. } => Severity::Warning,
            DeployEvent::Failed { .. } => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - ConsoleEventSink: leveled log lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants debug-level events
    fn wants_debug_events(&self) -> bool {
        false
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
