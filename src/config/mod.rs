//! Deploy configuration
//!
//! A JSON file mapping environment names to a bucket URL and a CloudFront
//! distribution id:
//!
//! ```json
//! { "environments": { "prod": { "bucket_url": "s3://site", "cf_distro": "E2QWRUHAPOMQZL" } } }
//! ```

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::{load_with_warnings, parse_with_warnings};
pub use types::{DeployConfig, EnvironmentConfig};
