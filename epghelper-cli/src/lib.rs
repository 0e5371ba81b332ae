//! Library exports for epghelper-cli.
//!
//! The binary in `main.rs` is a thin wrapper over these modules.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
