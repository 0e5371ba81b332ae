//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ConnectCommand, LsCommand, RmCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Helper tool for interacting with embedded postgres databases.
#[derive(Parser)]
#[command(name = "epghelper")]
#[command(
    version,
    about = "Helper tool for interacting with embedded postgres databases",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load configuration from this file instead of ~/.epghelper/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "EPGHELPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the directory holding the databases
    #[arg(long, value_name = "PATH", global = true, env = "EPGHELPER_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List existing databases
    Ls(LsCommand),

    /// Remove a database
    Rm(RmCommand),

    /// Connect to a database
    Connect(ConnectCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
