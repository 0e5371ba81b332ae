//! Connect command implementation.
//!
//! This module implements the `connect` command, which runs the interactive
//! client against one instance in the foreground.

use crate::error::CliError;
use crate::utils::{load_settings, scan_instances, GlobalOptions};
use clap::Args;
use epghelper::instance::latest;
use epghelper::{ClientCommand, Error};

/// Connect to a database.
#[derive(Args)]
pub struct ConnectCommand {
    /// Connect to the latest created database
    #[arg(short, long)]
    pub latest: bool,

    /// Port of the database to connect to
    #[arg(
        value_name = "PORT",
        required_unless_present = "latest",
        conflicts_with = "latest"
    )]
    pub port: Option<String>,

    /// Database name to pass to the client
    #[arg(short, long, value_name = "NAME")]
    pub database: Option<String>,
}

impl ConnectCommand {
    /// Execute the connect command.
    ///
    /// A client that fails to start or exits non-zero is reported but does
    /// not fail the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;

        let port = if self.latest {
            let instances = scan_instances(&settings, &global.logger)?;
            let port = latest(&instances)
                .ok_or(Error::NoInstances)?
                .port()
                .to_string();
            if !global.logger.is_quiet() {
                eprintln!("Connecting to {port}");
            }
            port
        } else {
            self.port.ok_or_else(|| {
                CliError::InvalidArguments("please specify the port to connect to".to_string())
            })?
        };

        let mut client = ClientCommand::new(&settings, port);
        if let Some(database) = self.database {
            client = client.with_database(database);
        }

        match client.run() {
            Ok(status) if status.success() => {}
            Ok(status) => eprintln!("{} exited with {status}", client.program()),
            Err(e) => eprintln!("Error: {e}"),
        }

        Ok(())
    }
}
