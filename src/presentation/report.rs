//! Failure reporting for errors raised outside the deploy use case

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::error::DeployError;

/// Send `err` to the sink as a `Failed` event.
///
/// Deploy errors are skipped since the use case has already reported them.
/// Returns whether an event was emitted.
pub fn report_failure(events: &dyn DeployEventSink, err: &anyhow::Error) -> bool {
    if err.downcast_ref::<DeployError>().is_some() {
        return false;
    }

    events.on_event(DeployEvent::Failed {
        error: format!("{:#}", err),
    });
    true
}
