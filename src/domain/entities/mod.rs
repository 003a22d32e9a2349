//! Domain Entities
//!
//! - `ASSETS` - the fixed, ordered list of names a deploy publishes
//! - `AssetKind` - how an asset found on disk gets mirrored

mod site_asset;

pub use site_asset::{AssetKind, ASSETS, ENTRY_POINT};
