//! Bucket Transfer Implementations

mod aws_cli;

pub use aws_cli::{AwsCli, AWS_BIN_ENV};
