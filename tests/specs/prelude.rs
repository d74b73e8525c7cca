//! Shared helpers for CLI specs

use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;
use tempfile::TempDir;

pub const TWO_JOBS: &str = r#"[
  {"job_id": 1, "name": "train", "state": "RUNNING"},
  {"job_id": 2, "name": "eval", "state": "PENDING"}
]"#;

pub const TWO_NODES: &str = r#"[
  {"name": "node-001", "state": "IDLE", "partitions": ["debug"]},
  {"name": "node-002", "state": "ALLOCATED", "partitions": ["gpu"]}
]"#;

/// Temporary directory holding listing and config files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, replacing any previous contents in one rename
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let staging = self.dir.path().join(format!(".{}.tmp", name));
        std::fs::write(&staging, contents).unwrap();
        std::fs::rename(&staging, &path).unwrap();
        path
    }

    pub fn cw(&self) -> CliBuilder {
        let mut cmd = assert_cmd::Command::cargo_bin("cw").unwrap();
        cmd.current_dir(self.path())
            .env_remove("CW_LOG")
            .timeout(Duration::from_secs(20));
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout: {}\nstderr: {}",
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        assert!(
            !output.status.success(),
            "expected failure\nstdout: {}",
            String::from_utf8_lossy(&output.stdout)
        );
        RunAssert { output }
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(needle),
            "stdout missing '{}':\n{}",
            needle,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(needle),
            "stdout unexpectedly has '{}':\n{}",
            needle,
            stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(needle),
            "stderr missing '{}':\n{}",
            needle,
            stderr
        );
        self
    }

    /// Stdout parsed as one JSON object per line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}
