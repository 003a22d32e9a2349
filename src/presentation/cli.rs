//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - A single command, no subcommands
//! - `--proj_dir` keeps its underscore spelling; `--proj-dir` is accepted too

use std::path::PathBuf;

use crate::domain::value_objects::Environment;
use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deploy a minimal static site (img/, index.html, robots.txt, script.js,
/// style.css) to S3 and invalidate its CloudFront distribution
#[derive(Parser, Debug)]
#[command(name = "sitepush")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Example:\n  sitepush --conf ./deploy.json --env prod --proj_dir /path/to/site --profile myaws"
)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub conf: PathBuf,

    /// Target environment
    #[arg(long, value_enum)]
    pub env: Environment,

    /// Root directory containing the static assets
    #[arg(long = "proj_dir", alias = "proj-dir", value_name = "PATH")]
    pub proj_dir: PathBuf,

    /// AWS CLI profile name (must exist in ~/.aws/credentials)
    #[arg(long)]
    pub profile: String,

    /// Show what would be transferred; no invalidation is sent
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI (NDJSON events on stdout)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows command output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
