//! Common test infrastructure
//!
//! Writes event fixtures to a temporary directory and runs the compiled binary
//! against them, with logs kept inside the same directory.

mod fixtures;

pub use fixtures::*;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestRun {
    pub dir: TempDir,
    pub input_file: PathBuf,
}

impl TestRun {
    pub fn with_events(events: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input_file = dir.path().join("events.json");
        std::fs::write(&input_file, events).expect("Failed to write events");
        Self { dir, input_file }
    }

    pub fn log_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Runs the binary with UTC timestamps and the log in the temp dir.
    pub fn run(&self, user_id: &str, extra_args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_notification-aggregator"))
            .arg(&self.input_file)
            .arg(user_id)
            .arg("--timezone")
            .arg("utc")
            .arg("--log-dir")
            .arg(self.log_dir())
            .args(extra_args)
            .env_remove("LOG_LEVEL")
            .output()
            .expect("Failed to run binary")
    }

    pub fn log_content(&self) -> String {
        std::fs::read_to_string(self.log_dir().join("app.log")).unwrap_or_default()
    }
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
