//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod deploy_target;
mod environment;
mod invalidation;

pub use config_warning::ConfigWarning;
pub use deploy_target::DeployTarget;
pub use environment::Environment;
pub use invalidation::{CallerReference, InvalidationRequest, INVALIDATE_ALL};
