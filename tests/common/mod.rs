//! Common test utilities for CLI integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: temp project, config and fake `aws` executable
//! - Assertion macros: `assert_output_contains!`, `assert_failed!`, etc.
//! - Fixtures: config files, asset contents, the fake `aws` script

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
