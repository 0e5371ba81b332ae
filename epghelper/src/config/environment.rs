//! Environment variable handling for configuration overrides.
//!
//! `EPGHELPER_*` variables override values from the configuration file.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use epghelper::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// `EPGHELPER_RESERVED_NAMES` is a comma-separated list that is appended
    /// to any names already configured.
    ///
    /// # Errors
    ///
    /// Returns an error if `EPGHELPER_OUTPUT_FORMAT` names an unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(base_dir) = env::var("EPGHELPER_BASE_DIR") {
            config.base_dir = Some(PathBuf::from(base_dir));
        }

        if let Ok(names) = env::var("EPGHELPER_RESERVED_NAMES") {
            let parsed = Self::parse_list(&names);
            match &mut config.reserved_names {
                Some(existing) => existing.extend(parsed),
                None => config.reserved_names = Some(parsed),
            }
        }

        if let Ok(format) = env::var("EPGHELPER_OUTPUT_FORMAT") {
            config.output_format =
                Some(OutputFormat::parse(&format).ok_or_else(|| Error::Validation {
                    field: "EPGHELPER_OUTPUT_FORMAT".into(),
                    message: format!("unknown output format '{format}'"),
                })?);
        }

        Self::apply_connection_overrides(config);

        Ok(())
    }

    /// Apply connection-related environment variable overrides.
    fn apply_connection_overrides(config: &mut Config) {
        let mut connection = config.connection.clone().unwrap_or_default();
        let mut modified = false;

        for (var, slot) in [
            ("EPGHELPER_HOST", &mut connection.host),
            ("EPGHELPER_USER", &mut connection.username),
            ("EPGHELPER_PASSWORD", &mut connection.password),
            ("EPGHELPER_DATABASE", &mut connection.database),
            ("EPGHELPER_CLIENT", &mut connection.client),
        ] {
            if let Ok(value) = env::var(var) {
                *slot = Some(value);
                modified = true;
            }
        }

        if modified {
            config.connection = Some(connection);
        }
    }

    /// Split a comma-separated list, dropping blank items.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    }
}
