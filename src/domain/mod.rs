//! Domain Layer
//!
//! What a deploy is, without any I/O.
//!
//! ## Structure
//!
//! - `entities/` - The fixed site asset list
//! - `value_objects/` - Immutable value types (Environment, DeployTarget, InvalidationRequest)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
