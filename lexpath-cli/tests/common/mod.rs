//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the caller's configuration
//! - Output parsing helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const LEXPATH_VARS: &[&str] = &[
    "LEXPATH_GRAMMAR",
    "LEXPATH_IGNORED_ENTRIES",
    "LEXPATH_OUTPUT_FORMAT",
    "LEXPATH_CONFIG_DIR",
    "LEXPATH_LOG_MODE",
];

/// Test environment with an isolated configuration directory.
///
/// Commands run with the temporary directory as their working directory,
/// an empty user configuration directory, and no `LEXPATH_*` variables
/// inherited from the test process.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join(".lexpath-user");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a command builder with a clean environment but no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("lexpath").expect("Failed to find lexpath binary");
        for var in LEXPATH_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the config directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get a command builder pinned to the POSIX grammar.
    pub fn posix(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--grammar").arg("posix");
        cmd
    }

    /// Get a command builder pinned to the Windows grammar.
    pub fn windows(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--grammar").arg("windows");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// The temp path as a string with forward slashes.
    pub fn root(&self) -> String {
        self.temp_path.to_string_lossy().replace('\\', "/")
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and its parents) in the test environment.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, yaml: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), yaml)
            .expect("Failed to write user config");
    }

    /// Write a project configuration file in the temp directory.
    pub fn write_project_config(&self, yaml: &str) {
        std::fs::write(self.temp_path.join("lexpath.yaml"), yaml)
            .expect("Failed to write project config");
    }
}

/// Collect stdout lines of a successful command.
#[allow(dead_code)]
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(ToString::to_string)
        .collect()
}
