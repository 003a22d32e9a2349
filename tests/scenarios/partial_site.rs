//! Scenario: Partial Site
//!
//! Journey: a site only has `index.html` and `style.css`.
//!
//! Steps:
//! 1. Config maps `stag` to a bucket prefix and distribution `DIST1`
//! 2. Deploy runs with `--dry-run` (no CloudFront call leaves the machine)
//!
//! Success Criteria:
//! - Two filtered syncs to the bucket root, index.html first
//! - Warnings for img, robots.txt and script.js
//! - One no-cache re-upload of index.html
//! - Invalidation for DIST1 reported as skipped

use crate::common::*;

const NO_CACHE: &str = "max-age=0, no-cache, no-store, must-revalidate";

#[test]
fn scenario_partial_site_dry_run() {
    let env = TestEnv::builder()
        .with_config(STAG_CONFIG)
        .with_file("index.html", INDEX_HTML)
        .with_file("style.css", STYLE_CSS)
        .build();

    let result = env.deploy("stag", &["--dry-run"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);

    let project = env.canonical_project_dir();
    let project = project.to_str().unwrap();
    let sync_file = |name: &str| {
        vec![
            "s3",
            "sync",
            project,
            "s3://example-site-stag/site",
            "--profile",
            "test-profile",
            "--delete",
            "--exclude",
            "*",
            "--include",
            name,
            "--dryrun",
        ]
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>()
    };
    let index = format!("{}/index.html", project);
    let upload: Vec<String> = vec![
        "s3",
        "cp",
        index.as_str(),
        "s3://example-site-stag/site/index.html",
        "--profile",
        "test-profile",
        "--cache-control",
        NO_CACHE,
        "--dryrun",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    assert_eq!(
        env.aws_calls(),
        vec![sync_file("index.html"), sync_file("style.css"), upload]
    );

    for missing in ["img", "robots.txt", "script.js"] {
        let line = format!("Asset not found, skipping: {}/{}", project, missing);
        assert!(
            result.stderr.contains(&line),
            "missing warning for {}:\n{}",
            missing,
            result.stderr
        );
    }
    assert!(result.stderr.contains("not invalidating DIST1"));
    assert!(result.stderr.contains("2 synced, 3 skipped"));
}
