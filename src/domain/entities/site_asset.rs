//! Site assets - the fixed set of names a deploy publishes
//!
//! The list is part of the program, not the configuration. Order matters:
//! assets are synced in exactly this order.

/// What an asset turned out to be on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Mirrored as a prefix (`<bucket>/<name>`)
    Directory,
    /// Mirrored into the bucket root, filtered to its own name
    File,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Directory => "directory",
            AssetKind::File => "file",
        }
    }
}

/// The site's root document
pub const ENTRY_POINT: &str = "index.html";

/// Every asset a deploy publishes, in sync order. `img` is the image
/// directory; the rest are single files.
pub const ASSETS: [&str; 5] = ["img", ENTRY_POINT, "robots.txt", "script.js", "style.css"];
