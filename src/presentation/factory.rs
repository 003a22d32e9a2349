//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::domain::ports::{DeployEventSink, InvalidationError};
use crate::infrastructure::{
    AwsCli, CloudFrontInvalidator, ConsoleEventSink, JsonConfigRepository, JsonEventSink, LocalFs,
    SystemClock,
};
use crate::ui::context::UiContext;

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<LocalFs, JsonConfigRepository>;

/// Create a deploy use case with all dependencies wired up
///
/// Both transfer ports are served by the `aws` CLI (honoring
/// `SITEPUSH_AWS_BIN`); invalidations go through the SDK under the same
/// profile.
pub fn create_deploy_use_case(
    profile: &str,
    dry_run: bool,
) -> Result<ConcreteDeployUseCase, InvalidationError> {
    let aws = AwsCli::from_env(profile).with_dry_run(dry_run);
    let invalidator = CloudFrontInvalidator::new(profile)?;

    Ok(DeployUseCase::new(
        LocalFs::new(),
        JsonConfigRepository::new(),
        Box::new(aws.clone()),
        Box::new(aws),
        Box::new(invalidator),
        Box::new(SystemClock),
    ))
}

/// Create the event sink matching the output mode
pub fn create_event_sink(ui: &UiContext) -> Arc<dyn DeployEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(
            ConsoleEventSink::stderr()
                .with_color(ui.color)
                .with_unicode(ui.unicode)
                .with_verbose(ui.show_debug()),
        )
    }
}
