//! Scenario: Missing Project Directory
//!
//! Journey: `--proj_dir` points at a path that does not exist.
//!
//! Success Criteria:
//! - Exit code 1 with the path in the message
//! - The config file is never consulted (even a broken one)
//! - No aws invocation at all

use crate::common::*;

#[test]
fn scenario_missing_project_dir_aborts_first() {
    let env = TestEnv::builder()
        .without_project_dir()
        .with_config("{ this is not json")
        .build();

    let result = env.deploy("stag", &[]);

    crate::assert_failed!(result);
    crate::assert_output_contains!(result, "project directory not found");
    crate::assert_output_not_contains!(result, "invalid config file");
    assert!(env.aws_calls().is_empty());
}

#[test]
fn scenario_project_path_is_a_file() {
    let env = TestEnv::builder()
        .without_project_dir()
        .with_config(STAG_CONFIG)
        .build();
    std::fs::write(env.project_dir(), "not a directory").unwrap();

    let result = env.deploy("stag", &[]);

    crate::assert_failed!(result);
    crate::assert_output_contains!(result, "project directory not found");
    assert!(env.aws_calls().is_empty());
}
