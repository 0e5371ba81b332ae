//! Error types for the epghelper library.
//!
//! This module provides the error hierarchy for scanning, removing and
//! connecting to embedded PostgreSQL instances, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an epghelper error.
///
/// # Examples
///
/// ```
/// use epghelper::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(2048)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the epghelper library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file is not valid YAML for the config schema.
    #[error("invalid YAML in {}: {source}", path.display())]
    Configuration {
        /// The configuration file.
        path: PathBuf,
        /// The parser error, with line and column.
        #[source]
        source: serde_yaml::Error,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The user's home directory could not be determined.
    #[error("failed to get user home directory")]
    HomeDirectoryUnavailable,

    /// The base directory could not be opened or listed.
    #[error("failed to read {}: {source}", path.display())]
    BaseDirectoryUnreadable {
        /// The base directory.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The size of an instance directory could not be computed.
    #[error("failed to get size for {}: {source}", path.display())]
    SizeComputation {
        /// The directory being measured.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An instance directory could not be removed.
    #[error("failed to remove {}: {source}", path.display())]
    RemoveFailed {
        /// The directory that could not be removed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// No instance directory matches the requested port.
    #[error("no database found with port {port}")]
    InstanceNotFound {
        /// The requested port.
        port: String,
    },

    /// The base directory holds no instance directories.
    #[error("no databases found")]
    NoInstances,

    /// The interactive client could not be started.
    #[error("failed to execute {program}: {source}")]
    ClientLaunch {
        /// The client program that was launched.
        program: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}
