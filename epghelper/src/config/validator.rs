//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged configuration before it is resolved into settings.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming the first offending field.
    ///
    /// # Examples
    ///
    /// ```
    /// use epghelper::config::{Config, ConfigValidator, ConnectionConfig};
    ///
    /// assert!(ConfigValidator::validate(&Config::default()).is_ok());
    ///
    /// let bad = Config {
    ///     connection: Some(ConnectionConfig {
    ///         host: Some("  ".to_string()),
    ///         ..Default::default()
    ///     }),
    ///     ..Default::default()
    /// };
    /// assert!(ConfigValidator::validate(&bad).is_err());
    /// ```
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref base_dir) = config.base_dir {
            if base_dir.as_os_str().is_empty() {
                return Err(Self::error("base_dir", "must not be empty"));
            }
        }

        if let Some(ref names) = config.reserved_names {
            for name in names {
                Self::validate_reserved_name(name)?;
            }
        }

        if let Some(ref connection) = config.connection {
            Self::validate_non_blank("connection.host", connection.host.as_deref())?;
            Self::validate_non_blank("connection.username", connection.username.as_deref())?;
            Self::validate_non_blank("connection.database", connection.database.as_deref())?;
            Self::validate_non_blank("connection.client", connection.client.as_deref())?;
        }

        Ok(())
    }

    fn validate_reserved_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Self::error("reserved_names", "names must not be empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(Self::error(
                "reserved_names",
                &format!("'{name}' must be a plain directory name"),
            ));
        }
        Ok(())
    }

    fn validate_non_blank(field: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(v) if v.trim().is_empty() => Err(Self::error(field, "must not be empty")),
            _ => Ok(()),
        }
    }

    fn error(field: &str, message: &str) -> Error {
        Error::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
