//! Interactive client launcher.
//!
//! The client runs in the foreground with the caller's stdin, stdout and
//! stderr, and the call blocks until it exits.

use crate::config::Settings;
use crate::error::{Error, Result};
use std::process::{Command, ExitStatus, Stdio};

/// Environment variable the client reads its password from.
pub const PASSWORD_ENV: &str = "PGPASSWORD";

/// An interactive client session against one port.
///
/// # Examples
///
/// ```
/// use epghelper::{ClientCommand, Settings};
///
/// let client = ClientCommand::new(&Settings::with_base_dir("/tmp/pg"), "5433");
/// assert_eq!(client.program(), "psql");
/// assert_eq!(client.args(), ["-h", "127.0.0.1", "-U", "postgres", "-p", "5433"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCommand {
    program: String,
    host: String,
    username: String,
    password: String,
    port: String,
    database: Option<String>,
}

impl ClientCommand {
    /// Prepare a session for `port` using the configured client and credentials.
    #[must_use]
    pub fn new(settings: &Settings, port: impl Into<String>) -> Self {
        Self {
            program: settings.client.clone(),
            host: settings.host.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            port: port.into(),
            database: None,
        }
    }

    /// Connect to `database` instead of the client's default.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// The client program.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The port being connected to.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Command-line arguments passed to the client.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-h".to_string(),
            self.host.clone(),
            "-U".to_string(),
            self.username.clone(),
            "-p".to_string(),
            self.port.clone(),
        ];
        if let Some(ref database) = self.database {
            args.push("-d".to_string());
            args.push(database.clone());
        }
        args
    }

    /// Build the process with inherited stdio and the password in its
    /// environment.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args())
            .env(PASSWORD_ENV, &self.password)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run the client and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns `ClientLaunch` if the program cannot be started. A non-zero
    /// exit is not an error; inspect the returned status.
    pub fn run(&self) -> Result<ExitStatus> {
        log::debug!("running {} {}", self.program, self.args().join(" "));
        self.to_command()
            .status()
            .map_err(|source| Error::ClientLaunch {
                program: self.program.clone(),
                source,
            })
    }
}
