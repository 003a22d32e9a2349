//! Scenario: Failing Sync
//!
//! Journey: every asset exists, but the fifth transfer is rejected.
//!
//! Success Criteria:
//! - Exit code 1, the aws diagnostic shown verbatim
//! - Exactly five aws calls, none of them the no-cache re-upload
//! - No invalidation reported

use crate::common::*;

fn full_site() -> TestEnvBuilder {
    TestEnv::builder()
        .with_config(STAG_CONFIG)
        .with_dir("img")
        .with_file("index.html", INDEX_HTML)
        .with_file("robots.txt", ROBOTS_TXT)
        .with_file("script.js", SCRIPT_JS)
        .with_file("style.css", STYLE_CSS)
}

#[test]
fn scenario_fifth_sync_failure_stops_deploy() {
    let env = full_site().failing_aws_call(5).build();

    let result = env.deploy("stag", &[]);

    crate::assert_failed!(result);
    crate::assert_output_contains!(result, "failed to sync style.css");
    crate::assert_output_contains!(result, "An error occurred (AccessDenied)");
    crate::assert_output_not_contains!(result, "invalidation");

    let calls = env.aws_calls();
    assert_eq!(calls.len(), 5);
    assert!(calls.iter().all(|call| call[1] == "sync"));
}

#[test]
fn scenario_entry_point_upload_failure_stops_deploy() {
    let env = full_site().failing_aws_call(6).build();

    let result = env.deploy("stag", &[]);

    crate::assert_failed!(result);
    crate::assert_output_contains!(result, "failed to upload index.html with cache headers");

    let calls = env.aws_calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[5][1], "cp");
}

#[test]
fn scenario_directory_asset_syncs_to_prefix() {
    let env = full_site().build();

    let result = env.deploy("stag", &["--dry-run"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let calls = env.aws_calls();
    assert_eq!(calls.len(), 6);
    assert_eq!(
        calls[0],
        [
            "s3".to_string(),
            "sync".to_string(),
            format!("{}/img", env.canonical_project_dir().display()),
            "s3://example-site-stag/site/img".to_string(),
            "--profile".to_string(),
            "test-profile".to_string(),
            "--delete".to_string(),
            "--dryrun".to_string(),
        ]
    );
}
