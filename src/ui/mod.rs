//! Console presentation helpers: design tokens, terminal detection and
//! the per-run output context.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
