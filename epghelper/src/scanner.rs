//! Directory scanner.
//!
//! Lists the instance directories under the base directory and measures
//! each one. A directory that cannot be measured is reported in
//! [`ScanReport::skipped`] instead of failing the whole scan.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::instance::Instance;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory the scanner had to leave out.
#[derive(Debug)]
pub struct SkippedEntry {
    /// Directory name.
    pub name: String,
    /// Why it was skipped.
    pub error: Error,
}

/// Result of a scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Measured instances, in no particular order.
    pub instances: Vec<Instance>,
    /// Directories that could not be measured.
    pub skipped: Vec<SkippedEntry>,
}

/// Enumerates instance directories under a base directory.
///
/// # Examples
///
/// ```no_run
/// use epghelper::{Scanner, Settings};
///
/// let scanner = Scanner::from_settings(&Settings::with_base_dir("/tmp/pg"));
/// let report = scanner.scan().unwrap();
/// for instance in &report.instances {
///     println!("{} {}", instance.port(), instance.size());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    base_dir: PathBuf,
    reserved_names: Vec<String>,
}

impl Scanner {
    /// Create a scanner for `base_dir` that ignores `reserved_names`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>, reserved_names: Vec<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            reserved_names,
        }
    }

    /// Create a scanner from resolved settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.base_dir, settings.reserved_names.clone())
    }

    /// The directory being scanned.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Whether `name` is excluded from scans.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_names.iter().any(|reserved| reserved == name)
    }

    /// Scan the base directory.
    ///
    /// Only real subdirectories are considered; files and symlinks at the
    /// top level are ignored.
    ///
    /// # Errors
    ///
    /// Returns `BaseDirectoryUnreadable` if the base directory cannot be
    /// opened or listed.
    pub fn scan(&self) -> Result<ScanReport> {
        let unreadable = |source: io::Error| Error::BaseDirectoryUnreadable {
            path: self.base_dir.clone(),
            source,
        };

        let mut report = ScanReport::default();
        for entry in fs::read_dir(&self.base_dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            // A name that is not UTF-8 cannot be a port.
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    log::debug!("ignoring non UTF-8 entry {}", raw.to_string_lossy());
                    continue;
                }
            };

            let is_dir = entry
                .file_type()
                .map(|file_type| file_type.is_dir())
                .map_err(unreadable)?;
            if !is_dir || self.is_reserved(&name) {
                continue;
            }

            match Self::measure(&entry.path(), &name) {
                Ok(instance) => report.instances.push(instance),
                Err(error) => {
                    log::debug!("skipping {name}: {error}");
                    report.skipped.push(SkippedEntry { name, error });
                }
            }
        }

        Ok(report)
    }

    fn measure(path: &Path, name: &str) -> Result<Instance> {
        let size_error = |source: io::Error| Error::SizeComputation {
            path: path.to_path_buf(),
            source,
        };

        let created = fs::symlink_metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(size_error)?;
        let size = directory_size(path)?;

        Ok(Instance::new(name, created, path, size))
    }
}

/// Sum the lengths of all regular files under `path`.
///
/// Symlinks are neither followed nor counted.
///
/// # Errors
///
/// Returns `SizeComputation` if any part of the tree cannot be read.
pub fn directory_size(path: &Path) -> Result<u64> {
    let mut size = 0u64;
    for entry in WalkDir::new(path).follow_links(false) {
        let entry = entry.map_err(|e| Error::SizeComputation {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_file() {
            let metadata = entry.metadata().map_err(|e| Error::SizeComputation {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
            size = size.saturating_add(metadata.len());
        }
    }
    Ok(size)
}
