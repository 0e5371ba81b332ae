//! Main entry point for the epghelper CLI.
//!
//! Commands:
//! - `ls`: List existing databases
//! - `rm`: Remove a database, or all of them
//! - `connect`: Connect to a database with the interactive client
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use epghelper_cli::cli::{Cli, Command};
use epghelper_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = epghelper::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        base_dir: cli.base_dir,
        logger,
    };

    let result = match cli.command {
        Command::Ls(cmd) => cmd.execute(&global),
        Command::Rm(cmd) => cmd.execute(&global),
        Command::Connect(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
