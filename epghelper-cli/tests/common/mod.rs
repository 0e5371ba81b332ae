//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated home directory and base directory per test
//! - Command builders that point the binary at them
//! - Fixtures for instance directories with fixed sizes and mtimes

use assert_cmd::Command;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

/// Environment variables that could leak settings from the developer's shell.
const SCRUBBED_VARS: [&str; 11] = [
    "EPGHELPER_CONFIG",
    "EPGHELPER_BASE_DIR",
    "EPGHELPER_RESERVED_NAMES",
    "EPGHELPER_OUTPUT_FORMAT",
    "EPGHELPER_HOST",
    "EPGHELPER_USER",
    "EPGHELPER_PASSWORD",
    "EPGHELPER_DATABASE",
    "EPGHELPER_CLIENT",
    "EPGHELPER_LOG_MODE",
    "PGPASSWORD",
];

/// Test environment with an isolated home and base directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Fake home directory
    pub home: PathBuf,
    /// Directory holding the instance directories
    pub base_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty base directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let base_dir = temp_dir.path().join("pg");
        fs::create_dir_all(&home).expect("Failed to create home dir");
        fs::create_dir_all(&base_dir).expect("Failed to create base dir");

        Self {
            temp_dir,
            home,
            base_dir,
        }
    }

    /// Root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Command with a scrubbed environment and `HOME` pointed at the fake
    /// home, but no `--base-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("epghelper").expect("Failed to find epghelper binary");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home);
        cmd
    }

    /// Command with `--base-dir` set to this environment's base directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--base-dir").arg(&self.base_dir);
        cmd
    }

    /// Create an instance directory with files of the given sizes and set
    /// its modification time to `mtime_secs` after the epoch.
    pub fn create_instance(&self, name: &str, files: &[(&str, usize)], mtime_secs: u64) -> PathBuf {
        let dir = self.base_dir.join(name);
        fs::create_dir_all(&dir).expect("Failed to create instance dir");
        for (relative, len) in files {
            let path = dir.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, vec![b'x'; *len]).expect("Failed to write instance file");
        }
        set_mtime(&dir, UNIX_EPOCH + Duration::from_secs(mtime_secs));
        dir
    }

    /// Create an instance directory whose tree is nested deeper than
    /// `PATH_MAX`, so its size cannot be computed even when running as root.
    ///
    /// The chain is built in the temp root, where each rename only touches
    /// short paths, then moved into the instance directory.
    #[cfg(unix)]
    pub fn create_unmeasurable_instance(&self, name: &str) -> PathBuf {
        let dir = self.base_dir.join(name);
        fs::create_dir_all(&dir).expect("Failed to create instance dir");

        let component = "d".repeat(200);
        let chain = self.path().join("chain");
        let next = self.path().join("next");
        fs::create_dir(&chain).unwrap();
        for _ in 0..24 {
            fs::create_dir(&next).unwrap();
            fs::rename(&chain, next.join(&component)).unwrap();
            fs::rename(&next, &chain).unwrap();
        }
        fs::rename(&chain, dir.join(&component)).unwrap();
        dir
    }

    /// Write `~/.epghelper/config.yaml` in the fake home.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.home.join(".epghelper");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    /// Run `ls` and return stdout.
    pub fn ls(&self, extra: &[&str]) -> String {
        let output = self
            .command()
            .arg("ls")
            .args(extra)
            .output()
            .expect("Failed to run ls command");

        assert!(
            output.status.success(),
            "ls failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Names of the directories currently in the base directory.
    pub fn remaining(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.base_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Set a directory's modification time.
fn set_mtime(dir: &Path, mtime: SystemTime) {
    File::open(dir)
        .and_then(|f| f.set_modified(mtime))
        .expect("Failed to set mtime");
}

/// Write an executable shell script that records its arguments and the
/// password it received, one per line, into `record`.
#[cfg(unix)]
#[allow(dead_code)]
pub fn recording_client(dir: &Path, record: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-psql");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"$@\" > '{}'\necho \"$PGPASSWORD\" >> '{}'\n",
            record.display(),
            record.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}
