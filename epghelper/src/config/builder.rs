//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, ConnectionConfig, OutputFormat};
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Directory under the home directory where embedded instances live.
pub const DEFAULT_BASE_DIR_NAME: &str = ".embedded-postgres-go";

/// Subdirectory used by the embedding library for extracted binaries.
pub const DEFAULT_RESERVED_NAME: &str = "extracted";

/// Default host the instances listen on.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default role.
pub const DEFAULT_USERNAME: &str = "postgres";
/// Default password.
pub const DEFAULT_PASSWORD: &str = "postgres";
/// Default database named in connection URLs.
pub const DEFAULT_DATABASE: &str = "postgres";
/// Default interactive client.
pub const DEFAULT_CLIENT: &str = "psql";

/// Fully resolved settings handed to the scanner, renderer and client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding one subdirectory per instance.
    pub base_dir: PathBuf,
    /// Subdirectory names skipped by the scanner.
    pub reserved_names: Vec<String>,
    /// Host the instances listen on.
    pub host: String,
    /// Role used to connect.
    pub username: String,
    /// Password for `username`.
    pub password: String,
    /// Database named in connection URLs.
    pub database: String,
    /// Interactive client program.
    pub client: String,
    /// Default output format for listings.
    pub output_format: OutputFormat,
}

impl Settings {
    /// Built-in settings rooted at `base_dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use epghelper::Settings;
    ///
    /// let settings = Settings::with_base_dir("/tmp/pg");
    /// assert_eq!(settings.host, "127.0.0.1");
    /// assert_eq!(settings.reserved_names, vec!["extracted".to_string()]);
    /// ```
    #[must_use]
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            reserved_names: vec![DEFAULT_RESERVED_NAME.to_string()],
            host: DEFAULT_HOST.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            client: DEFAULT_CLIENT.to_string(),
            output_format: OutputFormat::default(),
        }
    }

    fn defaults_layer() -> Config {
        Config {
            base_dir: None,
            reserved_names: Some(vec![DEFAULT_RESERVED_NAME.to_string()]),
            connection: Some(ConnectionConfig {
                host: Some(DEFAULT_HOST.to_string()),
                username: Some(DEFAULT_USERNAME.to_string()),
                password: Some(DEFAULT_PASSWORD.to_string()),
                database: Some(DEFAULT_DATABASE.to_string()),
                client: Some(DEFAULT_CLIENT.to_string()),
            }),
            output_format: Some(OutputFormat::default()),
        }
    }
}

/// Builds [`Settings`] from defaults, the user config file, the environment
/// and programmatic overrides, in increasing order of precedence.
///
/// # Examples
///
/// ```
/// use epghelper::config::{Config, ConfigBuilder};
/// use std::path::PathBuf;
///
/// let settings = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         base_dir: Some(PathBuf::from("/srv/pg")),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.base_dir, PathBuf::from("/srv/pg"));
/// assert_eq!(settings.client, "psql");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    home_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with every source enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `home` instead of the user's home directory.
    #[must_use]
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// Load this file instead of `~/.epghelper/config.yaml`.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `EPGHELPER_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources, validate, and resolve the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be loaded, an
    /// environment value is invalid, validation fails, or the home directory
    /// is needed but unknown.
    pub fn build(self) -> Result<Settings> {
        let home = self.home_dir.or_else(home::home_dir);

        let mut layers = vec![Settings::defaults_layer()];

        if !self.skip_files {
            match (&home, self.config_file.as_deref()) {
                (_, Some(explicit)) => {
                    let base = home.as_deref().unwrap_or_else(|| Path::new("."));
                    if let Some(source) = ConfigLoader::load_user_config(base, Some(explicit))? {
                        log::debug!("loaded config from {}", source.path.display());
                        layers.push(source.config);
                    }
                }
                (Some(home), None) => {
                    if let Some(source) = ConfigLoader::load_user_config(home, None)? {
                        log::debug!("loaded config from {}", source.path.display());
                        layers.push(source.config);
                    }
                }
                (None, None) => {}
            }
        }

        if !self.skip_env {
            let mut env_layer = Config::default();
            EnvironmentConfig::apply_overrides(&mut env_layer)?;
            layers.push(env_layer);
        }

        if let Some(overrides) = self.overrides {
            layers.push(overrides);
        }

        let merged = ConfigMerger::merge(&layers);
        ConfigValidator::validate(&merged)?;

        Self::resolve(merged, home.as_deref())
    }

    fn resolve(config: Config, home: Option<&Path>) -> Result<Settings> {
        let base_dir = match config.base_dir {
            Some(dir) => expand_tilde(&dir, home)?,
            None => home
                .ok_or(Error::HomeDirectoryUnavailable)?
                .join(DEFAULT_BASE_DIR_NAME),
        };

        let connection = config.connection.unwrap_or_default();
        Ok(Settings {
            base_dir,
            reserved_names: config.reserved_names.unwrap_or_default(),
            host: connection.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            username: connection
                .username
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: connection
                .password
                .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            database: connection
                .database
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            client: connection
                .client
                .unwrap_or_else(|| DEFAULT_CLIENT.to_string()),
            output_format: config.output_format.unwrap_or_default(),
        })
    }
}

/// Expand a leading `~` to the home directory.
fn expand_tilde(path: &Path, home: Option<&Path>) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home.ok_or(Error::HomeDirectoryUnavailable)?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}
