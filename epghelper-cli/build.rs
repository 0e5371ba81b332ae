//! Build script for epghelper-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("epghelper")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Helper tool for interacting with embedded postgres databases")
        .long_about(
            "List, remove and connect to the data directories of local embedded PostgreSQL servers",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load configuration from this file instead of ~/.epghelper/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("EPGHELPER_CONFIG"),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .help("Override the directory holding the databases")
                .value_name("PATH")
                .global(true)
                .env("EPGHELPER_BASE_DIR"),
        )
        .subcommands(vec![
            Command::new("ls")
                .about("List existing databases")
                .long_about("List database directories with creation time, size and URL"),
            Command::new("rm")
                .about("Remove a database")
                .long_about("Delete one database directory by port, or all of them with --all"),
            Command::new("connect")
                .about("Connect to a database")
                .long_about("Run psql against a database by port, or the latest with --latest"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("epghelper.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
