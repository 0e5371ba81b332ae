//! Remove command implementation.
//!
//! This module implements the `rm` command, which deletes one instance
//! directory, or all of them, after a confirmation prompt.

use crate::error::CliError;
use crate::utils::{load_settings, scan_instances, GlobalOptions};
use clap::Args;
use epghelper::instance::find_by_port;
use epghelper::prompt::confirm;
use epghelper::{Error, Instance};
use std::io;

/// Remove a database.
#[derive(Args)]
pub struct RmCommand {
    /// Remove all databases
    #[arg(short, long)]
    pub all: bool,

    /// Port (directory name) of the database to remove
    #[arg(
        value_name = "PORT",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub port: Option<String>,
}

impl RmCommand {
    /// Execute the rm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let instances = scan_instances(&settings, &global.logger)?;

        if self.all {
            return remove_all(&instances);
        }

        let Some(port) = self.port else {
            return Err(CliError::InvalidArguments(
                "please specify the database to remove".to_string(),
            ));
        };

        let instance = find_by_port(&instances, &port)
            .ok_or_else(|| Error::InstanceNotFound { port: port.clone() })?;

        if !ask(&format!("Are you sure you want to remove {port}?")) {
            println!("Aborted.");
            return Ok(());
        }

        instance.remove()?;
        println!("Deleted {port}");
        Ok(())
    }
}

fn remove_all(instances: &[Instance]) -> Result<(), CliError> {
    if !ask("Are you sure you want to delete all databases?") {
        println!("Aborted.");
        return Ok(());
    }

    // Stop at the first failure; earlier deletions stay done.
    for instance in instances {
        instance.remove()?;
        println!("Deleted {}", instance.port());
    }
    Ok(())
}

fn ask(message: &str) -> bool {
    confirm(&mut io::stdin().lock(), &mut io::stdout(), message)
}
