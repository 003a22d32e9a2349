//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case and event sink with infrastructure dependencies
//! - Reporting failures that happen outside the use case
//!
//! ## Usage
//!
//! ```ignore
//! use sitepush::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case("myaws", false)?;
//! let report = use_case.execute_with_events(&options, factory::create_event_sink(&ui))?;
//! ```

pub mod cli;
pub mod factory;
pub mod report;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_deploy_use_case, create_event_sink};
pub use report::report_failure;
