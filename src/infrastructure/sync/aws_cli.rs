//! AWS CLI Transfer
//!
//! Shells out to `aws s3 sync` / `aws s3 cp` for bucket transfers.

use crate::domain::ports::{
    Mirror, MirrorRequest, ObjectUploader, SyncError, TransferOutput, UploadRequest,
};
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Environment variable overriding the `aws` executable
pub const AWS_BIN_ENV: &str = "SITEPUSH_AWS_BIN";

const DEFAULT_PROGRAM: &str = "aws";

/// Transfer adapter backed by the AWS command line tool
///
/// Every invocation runs under the configured credentials profile and
/// blocks until the process exits.
#[derive(Debug, Clone)]
pub struct AwsCli {
    program: OsString,
    profile: String,
    dry_run: bool,
}

impl AwsCli {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            profile: profile.into(),
            dry_run: false,
        }
    }

    /// Use `SITEPUSH_AWS_BIN` when it is set and non-empty
    pub fn from_env(profile: impl Into<String>) -> Self {
        let cli = Self::new(profile);
        match std::env::var_os(AWS_BIN_ENV) {
            Some(program) if !program.is_empty() => cli.with_program(program),
            _ => cli,
        }
    }

    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Pass `--dryrun` to every transfer
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check if the configured `aws` binary runs at all
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn sync_args(&self, request: &MirrorRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "s3".into(),
            "sync".into(),
            request.source.clone().into_os_string(),
            request.destination.clone().into(),
            "--profile".into(),
            self.profile.clone().into(),
        ];
        if request.delete_extraneous {
            args.push("--delete".into());
        }
        if let Some(name) = &request.include {
            // Exclude everything, then re-include the one file
            args.push("--exclude".into());
            args.push("*".into());
            args.push("--include".into());
            args.push(name.clone().into());
        }
        if self.dry_run {
            args.push("--dryrun".into());
        }
        args
    }

    fn cp_args(&self, request: &UploadRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "s3".into(),
            "cp".into(),
            request.source.clone().into_os_string(),
            request.destination.clone().into(),
            "--profile".into(),
            self.profile.clone().into(),
        ];
        if let Some(cache_control) = &request.cache_control {
            args.push("--cache-control".into());
            args.push(cache_control.clone().into());
        }
        if self.dry_run {
            args.push("--dryrun".into());
        }
        args
    }

    fn run(&self, args: &[OsString]) -> Result<TransferOutput, SyncError> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| SyncError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SyncError::CommandFailed {
                command: self.describe(args),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(TransferOutput {
            log: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        })
    }

    /// `aws s3 sync`, `aws s3 cp`: program plus subcommand, for messages
    fn describe(&self, args: &[OsString]) -> String {
        let mut parts = vec![self.program.to_string_lossy().into_owned()];
        parts.extend(
            args.iter()
                .take(2)
                .map(|a| a.to_string_lossy().into_owned()),
        );
        parts.join(" ")
    }
}

impl Mirror for AwsCli {
    fn mirror(&self, request: &MirrorRequest) -> Result<TransferOutput, SyncError> {
        self.run(&self.sync_args(request))
    }
}

impl ObjectUploader for AwsCli {
    fn upload(&self, request: &UploadRequest) -> Result<TransferOutput, SyncError> {
        self.run(&self.cp_args(request))
    }
}
