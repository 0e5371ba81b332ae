//! Logging infrastructure for epghelper.
//!
//! Status and diagnostics go to stderr so that `ls` output on stdout stays
//! machine-readable.

use std::env;

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "EPGHELPER_LOG_MODE";

/// How much the CLI reports on stderr.
///
/// # Examples
///
/// ```
/// use epghelper::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!(LogLevel::parse("VERBOSE"), Some(LogLevel::Verbose));
/// assert_eq!(LogLevel::parse("loud"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but errors and command output.
    Quiet,
    /// Warnings about skipped databases.
    Normal,
    /// Debug lines as well.
    Verbose,
}

impl LogLevel {
    /// Parse `quiet`, `normal` or `verbose`, ignoring case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            _ => None,
        }
    }
}

/// Writes level-gated lines to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Create a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The active level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether status lines such as `Connecting to <port>` are suppressed.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.level == LogLevel::Quiet
    }

    /// `WARN:` line, shown unless quiet.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// `DEBUG:` line, shown only when verbose.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Build the logger for one run.
///
/// `--verbose` beats `--quiet`; with neither flag, a valid
/// `EPGHELPER_LOG_MODE` decides, else the level is Normal.
///
/// # Examples
///
/// ```
/// use epghelper::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| LogLevel::parse(&mode))
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}
