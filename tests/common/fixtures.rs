//! Test fixtures - reusable content constants for tests.

/// Staging-only config, bucket with a path prefix
pub const STAG_CONFIG: &str = r#"{
  "environments": {
    "stag": {
      "bucket_url": "s3://example-site-stag/site",
      "cf_distro": "DIST1"
    }
  }
}
"#;

/// Config with both environments, one key misspelled
pub const CONFIG_WITH_TYPO: &str = r#"{
  "environments": {
    "stag": {
      "bucket_url": "s3://example-site-stag",
      "cf_distro": "DIST1",
      "cf_distr": "typo"
    },
    "prod": {
      "bucket_url": "s3://example-site-prod",
      "cf_distro": "DIST2"
    }
  }
}
"#;

/// Production-only config
pub const PROD_ONLY_CONFIG: &str = r#"{
  "environments": {
    "prod": {
      "bucket_url": "s3://example-site-prod",
      "cf_distro": "DIST2"
    }
  }
}
"#;

pub const INDEX_HTML: &str = "<!doctype html>\n<title>Example</title>\n";
pub const STYLE_CSS: &str = "body { margin: 0; }\n";
pub const SCRIPT_JS: &str = "console.log('hello');\n";
pub const ROBOTS_TXT: &str = "User-agent: *\nDisallow:\n";

/// Stand-in for the `aws` executable.
///
/// Appends its argv, `|`-separated, as one line to `$SITEPUSH_FAKE_AWS_LOG`,
/// and exits 1 on the call numbered `$SITEPUSH_FAKE_AWS_FAIL_ON`.
pub const FAKE_AWS_SCRIPT: &str = r#"#!/bin/sh
log="$SITEPUSH_FAKE_AWS_LOG"
(IFS='|'; printf '%s\n' "$*") >> "$log"
calls=$(wc -l < "$log" | tr -d ' ')
if [ -n "$SITEPUSH_FAKE_AWS_FAIL_ON" ] && [ "$calls" -eq "$SITEPUSH_FAKE_AWS_FAIL_ON" ]; then
  echo "upload failed: An error occurred (AccessDenied) when calling the PutObject operation: Access Denied" >&2
  exit 1
fi
echo "(dryrun) upload: $3 to $4"
"#;
