//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's configuration

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables the CLI reads configuration from.
const CONFIG_ENV: [&str; 5] = [
    "QPATH_CONFIG",
    "QPATH_ENCODER",
    "QPATH_OUTPUT_FORMAT",
    "QPATH_NAMESPACES",
    "QPATH_ENCODE_DELIMITER",
];

/// Test environment with an isolated working and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command running in the temporary directory.
    ///
    /// `HOME` points at the temporary directory so no user configuration is
    /// picked up, and every `QPATH_*` configuration variable is cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("qpath").expect("Failed to find qpath binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for key in CONFIG_ENV {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Write a file into the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a project `qpath.yaml`.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        self.write_file("qpath.yaml", contents)
    }

    /// Run a command and parse its stdout as JSON.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .arg("--format")
            .arg("json")
            .args(args)
            .output()
            .expect("Failed to run qpath");
        assert!(
            output.status.success(),
            "qpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
