//! Test environment builder for isolated sitepush runs.
//!
//! Provides `TestEnv` - a temp directory holding a site project, a deploy
//! config and a fake `aws` executable, plus helpers to run the CLI against
//! them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::FAKE_AWS_SCRIPT;

/// Result of running the sitepush CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// Layout inside the temp root:
/// - `site/` - project directory (unless removed)
/// - `deploy.json` - config file (unless omitted)
/// - `bin/aws` - fake aws executable
/// - `aws-calls.log` - one line per fake aws invocation
pub struct TestEnv {
    pub root: TempDir,
    fail_on: Option<usize>,
    sitepush_bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root.path().join("site")
    }

    /// Project directory as the binary sees it after canonicalization
    pub fn canonical_project_dir(&self) -> PathBuf {
        self.project_dir()
            .canonicalize()
            .expect("project dir should exist")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("deploy.json")
    }

    pub fn fake_aws(&self) -> PathBuf {
        self.root.path().join("bin").join("aws")
    }

    fn call_log(&self) -> PathBuf {
        self.root.path().join("aws-calls.log")
    }

    /// Each recorded fake aws invocation, split into its arguments
    pub fn aws_calls(&self) -> Vec<Vec<String>> {
        match std::fs::read_to_string(self.call_log()) {
            Ok(content) => content
                .lines()
                .map(|line| line.split('|').map(str::to_string).collect())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Run `sitepush` with the standard required flags for `env` plus `extra`
    pub fn deploy(&self, env: &str, extra: &[&str]) -> TestResult {
        self.deploy_with_env(env, extra, &[])
    }

    /// Like `deploy`, with extra environment variables for the process
    pub fn deploy_with_env(
        &self,
        env: &str,
        extra: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let conf = self.config_path();
        let proj_dir = self.project_dir();
        let mut args = vec![
            "--conf",
            conf.to_str().expect("utf-8 temp path"),
            "--env",
            env,
            "--proj_dir",
            proj_dir.to_str().expect("utf-8 temp path"),
            "--profile",
            "test-profile",
        ];
        args.extend_from_slice(extra);
        self.run_with_env(&args, env_vars)
    }

    /// Run sitepush with raw arguments
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run sitepush with raw arguments and extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.sitepush_bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("SITEPUSH_AWS_BIN", self.fake_aws())
            .env("SITEPUSH_FAKE_AWS_LOG", self.call_log())
            .env("SITEPUSH_NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("SITEPUSH_FAKE_AWS_FAIL_ON");

        if let Some(n) = self.fail_on {
            cmd.env("SITEPUSH_FAKE_AWS_FAIL_ON", n.to_string());
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute sitepush");

        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    dirs: Vec<String>,
    config: Option<String>,
    create_project_dir: bool,
    fail_on: Option<usize>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            dirs: Vec::new(),
            config: None,
            create_project_dir: true,
            fail_on: None,
        }
    }

    /// Add a file to the project directory
    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a directory (e.g. `img`) to the project directory
    pub fn with_dir(mut self, name: &str) -> Self {
        self.dirs.push(name.to_string());
        self
    }

    /// Write `deploy.json` with this content
    pub fn with_config(mut self, json: &str) -> Self {
        self.config = Some(json.to_string());
        self
    }

    /// Do not create the project directory at all
    pub fn without_project_dir(mut self) -> Self {
        self.create_project_dir = false;
        self
    }

    /// Make the fake aws exit non-zero on its n-th invocation (1-based)
    pub fn failing_aws_call(mut self, n: usize) -> Self {
        self.fail_on = Some(n);
        self
    }

    pub fn build(self) -> TestEnv {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let env = TestEnv {
            root,
            fail_on: self.fail_on,
            sitepush_bin: PathBuf::from(env!("CARGO_BIN_EXE_sitepush")),
        };

        if self.create_project_dir {
            let project = env.project_dir();
            std::fs::create_dir_all(&project).expect("Failed to create project dir");
            for dir in &self.dirs {
                std::fs::create_dir_all(project.join(dir)).expect("Failed to create asset dir");
                std::fs::write(project.join(dir).join("logo.png"), b"\x89PNG")
                    .expect("Failed to write asset");
            }
            for (name, content) in &self.files {
                std::fs::write(project.join(name), content).expect("Failed to write asset");
            }
        }

        if let Some(config) = &self.config {
            std::fs::write(env.config_path(), config).expect("Failed to write config");
        }

        write_fake_aws(&env.fake_aws());
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_fake_aws(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create bin dir");
    }
    std::fs::write(path, FAKE_AWS_SCRIPT).expect("Failed to write fake aws");
    let mut perms = std::fs::metadata(path)
        .expect("fake aws metadata")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to chmod fake aws");
}
