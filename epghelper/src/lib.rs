#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # epghelper
//!
//! A library for managing the data directories of local embedded PostgreSQL
//! servers.
//!
//! Each server keeps its data in a directory named after its port, under a
//! shared base directory. This crate lists those directories with their size
//! and creation time, removes them, and launches an interactive client
//! against one of them.
//!
//! ## Core Types
//!
//! - [`Settings`] and [`ConfigBuilder`]: Layered configuration
//! - [`Scanner`] and [`Instance`]: Directory enumeration and records
//! - [`ClientCommand`]: Interactive client launcher
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use epghelper::instance::sort_by_created;
//! use epghelper::output::render_instance_table;
//! use epghelper::{ConfigBuilder, Scanner};
//!
//! let settings = ConfigBuilder::new().build().unwrap();
//! let mut report = Scanner::from_settings(&settings).scan().unwrap();
//! sort_by_created(&mut report.instances);
//! print!("{}", render_instance_table(&report.instances, &settings));
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod instance;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod scanner;

// Re-export key types at crate root for convenience
pub use client::ClientCommand;
pub use config::{Config, ConfigBuilder, Settings};
pub use error::{Error, Result};
pub use instance::Instance;
pub use logging::{init_logger, LogLevel, Logger};
pub use scanner::{ScanReport, Scanner, SkippedEntry};
