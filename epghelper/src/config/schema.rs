//! Configuration schema definitions.
//!
//! Every field is optional so that a partial file, an environment override
//! and programmatic overrides can be layered on top of each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Configuration structure as read from a YAML file.
///
/// # Examples
///
/// ```
/// use epghelper::config::{Config, ConnectionConfig};
///
/// let config = Config {
///     connection: Some(ConnectionConfig {
///         host: Some("localhost".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert!(config.base_dir.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding one subdirectory per embedded instance.
    pub base_dir: Option<PathBuf>,

    /// Subdirectory names that are never treated as instances.
    pub reserved_names: Option<Vec<String>>,

    /// Client connection settings.
    pub connection: Option<ConnectionConfig>,

    /// Default output format for `ls`.
    pub output_format: Option<OutputFormat>,
}

/// Settings used to build connection URLs and launch the client.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Host the instances listen on.
    pub host: Option<String>,

    /// Role used to connect.
    pub username: Option<String>,

    /// Password handed to the client through `PGPASSWORD`.
    pub password: Option<String>,

    /// Database named in connection URLs.
    pub database: Option<String>,

    /// Interactive client program.
    pub client: Option<String>,
}

/// Output format for listings.
///
/// # Examples
///
/// ```
/// use epghelper::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Csv.to_string(), "csv");
/// assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table with a total row.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
