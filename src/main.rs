//! sitepush CLI
//!
//! Usage: sitepush --conf <PATH> --env <stag|prod> --proj_dir <PATH> --profile <NAME>

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use sitepush::domain::ports::{DeployEventSink, SyncError};
use sitepush::infrastructure::{AwsCli, AWS_BIN_ENV};
use sitepush::presentation::{create_deploy_use_case, create_event_sink, report_failure, Cli};
use sitepush::ui::context::UiContext;
use sitepush::{DeployError, DeployOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let events = create_event_sink(&ui);

    match run(&cli, Arc::clone(&events)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(events.as_ref(), &err);
            if !ui.json {
                if let Some(hint) = hint_for(&err, &cli.profile) {
                    eprintln!("Hint: {}", hint);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, events: Arc<dyn DeployEventSink>) -> Result<()> {
    let use_case = create_deploy_use_case(&cli.profile, cli.dry_run)?;
    let options = DeployOptions::new(&cli.conf, cli.env, &cli.proj_dir).with_dry_run(cli.dry_run);

    use_case.execute_with_events(&options, events)?;
    Ok(())
}

fn hint_for(err: &anyhow::Error, profile: &str) -> Option<String> {
    match err.downcast_ref::<DeployError>()? {
        DeployError::Sync {
            source: SyncError::Spawn { .. },
            ..
        }
        | DeployError::Upload {
            source: SyncError::Spawn { .. },
            ..
        } if !AwsCli::from_env(profile).check_available() => Some(format!(
            "install the AWS CLI or point {} at the aws executable",
            AWS_BIN_ENV
        )),
        _ => None,
    }
}
