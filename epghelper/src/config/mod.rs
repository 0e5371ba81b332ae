//! Configuration system for epghelper.
//!
//! Settings are layered from, lowest to highest precedence:
//!
//! 1. Built-in defaults (`~/.embedded-postgres-go`, `psql` as
//!    `postgres`/`postgres` on `127.0.0.1`, `extracted` reserved)
//! 2. User config (`~/.epghelper/config.yaml`, or an explicit file)
//! 3. Environment variables (`EPGHELPER_*`)
//! 4. Programmatic overrides (via `ConfigBuilder::with_config`)
//!
//! # Examples
//!
//! ```
//! use epghelper::config::{Config, ConfigBuilder, ConnectionConfig};
//! use std::path::PathBuf;
//!
//! let settings = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         base_dir: Some(PathBuf::from("/var/lib/pg-dev")),
//!         connection: Some(ConnectionConfig {
//!             username: Some("dev".to_string()),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.username, "dev");
//! assert_eq!(settings.password, "postgres");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::{ConfigBuilder, Settings};
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, ConnectionConfig, OutputFormat};
pub use validator::ConfigValidator;
