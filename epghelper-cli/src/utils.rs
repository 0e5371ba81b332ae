//! Utility functions for CLI operations.
//!
//! Shared by every command: global options, settings resolution, and the
//! scan step that logs skipped directories.

use crate::error::CliError;
use epghelper::instance::sort_by_created;
use epghelper::{Config, ConfigBuilder, Instance, Logger, Scanner, Settings};
use std::error::Error as _;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Configuration file to load instead of the default one.
    pub config: Option<PathBuf>,

    /// Override the base directory location.
    pub base_dir: Option<PathBuf>,

    /// Logger built from the verbosity flags.
    pub logger: Logger,
}

/// Resolve settings from defaults, config file, environment and flags.
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    let overrides = Config {
        base_dir: global.base_dir.clone(),
        ..Default::default()
    };

    let settings = builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    global
        .logger
        .debug(&format!("base directory: {}", settings.base_dir.display()));
    Ok(settings)
}

/// Scan the base directory and return instances sorted by creation time.
///
/// Directories that cannot be measured are logged and left out.
pub fn scan_instances(settings: &Settings, logger: &Logger) -> Result<Vec<Instance>, CliError> {
    let report = Scanner::from_settings(settings).scan()?;

    for skipped in &report.skipped {
        logger.warn(&format!(
            "failed to get size for {}: {}",
            skipped.name,
            skip_reason(&skipped.error)
        ));
    }

    let mut instances = report.instances;
    sort_by_created(&mut instances);
    logger.debug(&format!("found {} database(s)", instances.len()));
    Ok(instances)
}

/// The underlying cause of a skipped entry, without the library's own
/// "failed to get size for <path>" prefix.
fn skip_reason(error: &epghelper::Error) -> String {
    match error.source() {
        Some(source) => source.to_string(),
        None => error.to_string(),
    }
}
