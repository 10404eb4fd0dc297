//! Test environment builder for isolated CLI testing.
//!
//! Provides `TestEnv` - a temp working directory with an optional users file
//! and config, plus helpers to run the binary inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Stdout split into lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Isolated test environment.
pub struct TestEnv {
    /// Working directory for the command
    pub root: TempDir,
    /// Directory used as XDG_CONFIG_HOME so user config never leaks in
    config_home: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Path of the default users file
    pub fn users_file(&self) -> PathBuf {
        self.path("users.toml")
    }

    pub fn read_users_file(&self) -> String {
        std::fs::read_to_string(self.users_file()).unwrap_or_default()
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(full, content).expect("Failed to write file");
    }

    /// Run the CLI from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_single-role-delete"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("SRD_ROLE")
            .env_remove("SRD_USERS_FILE")
            .env_remove("SRD_VERBOSITY")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute single-role-delete");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn config_home(&self) -> &Path {
        self.config_home.path()
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    users: Option<String>,
    config: Option<String>,
}

impl TestEnvBuilder {
    /// Write `users.toml` in the working directory
    pub fn with_users(mut self, toml: &str) -> Self {
        self.users = Some(toml.to_string());
        self
    }

    /// Write `single-role-delete.toml` in the working directory
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let config_home = TempDir::new().expect("Failed to create config temp dir");

        if let Some(users) = &self.users {
            std::fs::write(root.path().join("users.toml"), users)
                .expect("Failed to write users.toml");
        }
        if let Some(config) = &self.config {
            std::fs::write(root.path().join("single-role-delete.toml"), config)
                .expect("Failed to write config");
        }

        TestEnv { root, config_home }
    }
}
