//! Mirror Port
//!
//! Abstracts the directory/file mirroring operation (`aws s3 sync`).
//! The deploy use case only decides *what* to mirror; the adapter decides
//! how to talk to the bucket.

use std::path::PathBuf;

/// Error from a transfer command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The transfer program could not be started
    Spawn { program: String, message: String },
    /// The transfer program ran and exited non-zero
    CommandFailed {
        command: String,
        code: Option<i32>,
        /// Diagnostic output of the command, as printed
        stderr: String,
    },
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn { program, message } => {
                write!(f, "failed to run '{}': {}", program, message)
            }
            Self::CommandFailed {
                command,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "`{}` exited with code {}", command, code)?,
                    None => write!(f, "`{}` was terminated by a signal", command)?,
                }
                if !stderr.is_empty() {
                    write!(f, "\n{}", stderr)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SyncError {}

/// Output of a successful transfer command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferOutput {
    /// What the command printed on stdout (trimmed)
    pub log: String,
}

/// One mirroring call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorRequest {
    /// Local directory to mirror from
    pub source: PathBuf,
    /// Remote location to mirror into
    pub destination: String,
    /// Delete remote entries that have no local counterpart
    pub delete_extraneous: bool,
    /// Restrict the mirror to this exact name (everything else excluded)
    pub include: Option<String>,
}

impl MirrorRequest {
    /// Mirror a whole directory, deleting extraneous remote entries
    pub fn directory(source: impl Into<PathBuf>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            delete_extraneous: true,
            include: None,
        }
    }

    /// Mirror a single named file out of `source_dir`
    pub fn single_file(
        source_dir: impl Into<PathBuf>,
        destination: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            source: source_dir.into(),
            destination: destination.into(),
            delete_extraneous: true,
            include: Some(name.into()),
        }
    }
}

/// Trait for mirroring local content into the bucket
///
/// Implementations:
/// - `AwsCli`: shells out to `aws s3 sync`
/// - test fakes recording requests
pub trait Mirror {
    /// Copy new/changed content and optionally delete extraneous entries.
    ///
    /// Blocks until the transfer finishes.
    fn mirror(&self, request: &MirrorRequest) -> Result<TransferOutput, SyncError>;
}
