//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the home directory that holds the user config file.
pub const CONFIG_DIR_NAME: &str = ".epghelper";

/// File name of the user config file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A configuration file together with its parsed contents.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use epghelper::config::ConfigLoader;
/// use std::path::Path;
///
/// let source = ConfigLoader::load_user_config(Path::new("/home/me"), None).unwrap();
/// println!("loaded config: {}", source.is_some());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file.
    ///
    /// An `explicit` path must exist. Without one, `{home}/.epghelper/config.yaml`
    /// is loaded when present and silently skipped otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if a file exists
    /// but cannot be read or parsed.
    pub fn load_user_config(home: &Path, explicit: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::Validation {
                        field: "config".into(),
                        message: format!("configuration file not found: {}", path.display()),
                    });
                }
                path.to_path_buf()
            }
            None => Self::user_config_path(home),
        };

        if !config_path.exists() {
            log::debug!("no user config at {}", config_path.display());
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|source| Error::Configuration {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default location of the user config file.
    #[must_use]
    pub fn user_config_path(home: &Path) -> PathBuf {
        home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
    }
}
