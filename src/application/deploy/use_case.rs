//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Validate the project directory
//! 2. Load the config and resolve the environment
//! 3. Mirror each site asset (skipping absent ones)
//! 4. Re-upload the entry point with no-cache headers
//! 5. Request a full CDN invalidation
//!
//! Any failure past a skip aborts the run; nothing is retried or rolled back.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{AssetKind, ASSETS, ENTRY_POINT};
use crate::domain::ports::{
    CdnInvalidator, Clock, ConfigRepository, DeployEvent, DeployEventSink, EntryKind, FileSystem,
    Mirror, MirrorRequest, NoopEventSink, ObjectUploader, TransferOutput, UploadRequest,
};
use crate::domain::value_objects::{CallerReference, DeployTarget, InvalidationRequest};
use crate::error::{DeployError, DeployResult};

use super::options::DeployOptions;
use super::result::DeployReport;

/// Deploy use case - orchestrates the deployment flow
///
/// Local lookups are generic; the remote collaborators are boxed so the
/// same use case runs against the AWS adapters or test fakes.
pub struct DeployUseCase<FS, CR>
where
    FS: FileSystem,
    CR: ConfigRepository,
{
    file_system: FS,
    config_repo: CR,
    mirror: Box<dyn Mirror>,
    uploader: Box<dyn ObjectUploader>,
    invalidator: Box<dyn CdnInvalidator>,
    clock: Box<dyn Clock>,
}

impl<FS, CR> DeployUseCase<FS, CR>
where
    FS: FileSystem,
    CR: ConfigRepository,
{
    pub fn new(
        file_system: FS,
        config_repo: CR,
        mirror: Box<dyn Mirror>,
        uploader: Box<dyn ObjectUploader>,
        invalidator: Box<dyn CdnInvalidator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            file_system,
            config_repo,
            mirror,
            uploader,
            invalidator,
            clock,
        }
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions) -> DeployResult<DeployReport> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    ///
    /// A fatal error is reported as a `Failed` event before it is returned.
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult<DeployReport> {
        let result = self.run(options, event_sink.as_ref());
        if let Err(err) = &result {
            event_sink.on_event(DeployEvent::Failed {
                error: err.to_string(),
            });
        }
        result
    }

    fn run(
        &self,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        // Step 1: Project directory must exist before anything else is read
        let project_dir = self.resolve_project_dir(&options.project_dir)?;

        events.on_event(DeployEvent::Started {
            environment: options.environment,
            project_dir: project_dir.clone(),
            dry_run: options.dry_run,
        });

        // Step 2: Config lookup
        let target = self.resolve_target(options, events)?;
        let mut report = DeployReport::new(target.clone(), options.dry_run);

        // Step 3: Assets, in list order
        for (index, name) in ASSETS.iter().enumerate() {
            self.sync_asset(index, name, &project_dir, &target, events, &mut report)?;
        }

        // Step 4: Entry point, after every asset sync
        self.upload_entry_point(&project_dir, &target, events, &mut report)?;

        // Step 5: Invalidation, always last
        if options.dry_run {
            events.on_event(DeployEvent::InvalidationSkipped {
                distribution_id: target.distribution_id().to_string(),
            });
        } else {
            report.invalidation_id = Some(self.invalidate(&target, events)?);
        }

        events.on_event(DeployEvent::Completed {
            synced_count: report.synced.len(),
            skipped_count: report.skipped.len(),
            dry_run: options.dry_run,
        });

        Ok(report)
    }

    fn resolve_project_dir(&self, project_dir: &Path) -> DeployResult<PathBuf> {
        let not_found = || DeployError::ProjectDirNotFound {
            path: project_dir.to_path_buf(),
        };

        let resolved = self
            .file_system
            .canonicalize(project_dir)
            .map_err(|_| not_found())?;

        match self.file_system.entry_kind(&resolved) {
            EntryKind::Directory => Ok(resolved),
            EntryKind::File | EntryKind::Missing => Err(not_found()),
        }
    }

    fn resolve_target(
        &self,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployTarget> {
        let (config, warnings) = self.config_repo.load_with_warnings(&options.config_path)?;

        for warning in warnings {
            events.on_event(DeployEvent::ConfigWarning { warning });
        }

        let target = config.target_for(options.environment, &options.config_path)?;

        events.on_event(DeployEvent::TargetResolved {
            bucket_url: target.bucket_url().to_string(),
            distribution_id: target.distribution_id().to_string(),
        });

        Ok(target)
    }

    fn sync_asset(
        &self,
        index: usize,
        name: &str,
        project_dir: &Path,
        target: &DeployTarget,
        events: &dyn DeployEventSink,
        report: &mut DeployReport,
    ) -> DeployResult<()> {
        let source = project_dir.join(name);

        let (kind, request) = match self.file_system.entry_kind(&source) {
            EntryKind::Missing => {
                events.on_event(DeployEvent::AssetSkipped {
                    index,
                    name: name.to_string(),
                    path: source,
                });
                report.skipped.push(name.to_string());
                return Ok(());
            }
            EntryKind::Directory => (
                AssetKind::Directory,
                MirrorRequest::directory(&source, target.destination_for(name)),
            ),
            EntryKind::File => (
                AssetKind::File,
                MirrorRequest::single_file(project_dir, target.bucket_url(), name),
            ),
        };

        events.on_event(DeployEvent::AssetStarted {
            index,
            name: name.to_string(),
            kind,
            source,
            destination: request.destination.clone(),
        });

        let output = self
            .mirror
            .mirror(&request)
            .map_err(|source| DeployError::Sync {
                asset: name.to_string(),
                source,
            })?;
        emit_output(events, output);

        events.on_event(DeployEvent::AssetSynced {
            index,
            name: name.to_string(),
        });
        report.synced.push(name.to_string());
        Ok(())
    }

    fn upload_entry_point(
        &self,
        project_dir: &Path,
        target: &DeployTarget,
        events: &dyn DeployEventSink,
        report: &mut DeployReport,
    ) -> DeployResult<()> {
        let source = project_dir.join(ENTRY_POINT);

        if self.file_system.entry_kind(&source) != EntryKind::File {
            events.on_event(DeployEvent::EntryPointMissing { path: source });
            return Ok(());
        }

        let request = UploadRequest::no_cache(source, target.destination_for(ENTRY_POINT));
        let output = self
            .uploader
            .upload(&request)
            .map_err(|source| DeployError::Upload {
                asset: ENTRY_POINT.to_string(),
                source,
            })?;
        emit_output(events, output);

        events.on_event(DeployEvent::EntryPointUploaded {
            destination: request.destination,
            cache_control: request.cache_control.unwrap_or_default(),
        });
        report.entry_point_uploaded = true;
        Ok(())
    }

    fn invalidate(
        &self,
        target: &DeployTarget,
        events: &dyn DeployEventSink,
    ) -> DeployResult<String> {
        let request = InvalidationRequest::all_paths(
            target.distribution_id(),
            CallerReference::from_time(self.clock.now()),
        );

        let invalidation_id =
            self.invalidator
                .invalidate(&request)
                .map_err(|source| DeployError::Invalidation {
                    distribution_id: target.distribution_id().to_string(),
                    source,
                })?;

        events.on_event(DeployEvent::InvalidationSubmitted {
            distribution_id: request.distribution_id().to_string(),
            invalidation_id: invalidation_id.clone(),
            caller_reference: request.caller_reference().to_string(),
        });

        Ok(invalidation_id)
    }
}

fn emit_output(events: &dyn DeployEventSink, output: TransferOutput) {
    if output.log.is_empty() || !events.wants_debug_events() {
        return;
    }
    events.on_event(DeployEvent::CommandOutput { output: output.log });
}
