//! Isolated test environment for running the `kiln` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a Kiln CLI command
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
}

/// Project directory plus a private home, so no user config leaks in.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    kiln_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            kiln_bin: PathBuf::from(env!("CARGO_BIN_EXE_kiln")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory, creating parents.
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write the user config (`$XDG_CONFIG_HOME/kiln/config.toml`).
    pub fn write_user_config(&self, content: &str) {
        let path = self.home_dir.path().join(".config/kiln/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        std::fs::write(path, content).expect("Failed to write user config");
    }

    /// Set a file's modification time to a fixed offset from a base instant.
    pub fn set_mtime(&self, relative: &str, offset_secs: u64) {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000 + offset_secs);
        std::fs::File::options()
            .write(true)
            .open(self.project_path(relative))
            .expect("Failed to open file")
            .set_modified(time)
            .expect("Failed to set mtime");
    }

    pub fn mtime(&self, relative: &str) -> SystemTime {
        std::fs::metadata(self.project_path(relative))
            .and_then(|m| m.modified())
            .expect("Failed to read mtime")
    }

    /// Parse an artifact written by the reference frontend.
    pub fn read_artifact(&self, relative: &str) -> Value {
        let content = std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read artifact {}: {}", relative, e));
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Artifact {} is not JSON: {}", relative, e))
    }

    /// Run kiln from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run kiln from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.kiln_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG");
        for var in [
            "KILN_OUTPUT_DIR",
            "KILN_ENCODING",
            "KILN_REBUILD",
            "KILN_ERROR_LIMIT",
            "KILN_DEBUG",
        ] {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute kiln");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
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
