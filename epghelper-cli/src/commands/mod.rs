//! CLI command implementations.
//!
//! - `ls`: List instance directories with size and creation time
//! - `rm`: Remove one or all instance directories
//! - `connect`: Run the interactive client against an instance
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod connect;
pub mod ls;
pub mod rm;

pub use completions::CompletionsCommand;
pub use connect::ConnectCommand;
pub use ls::LsCommand;
pub use rm::RmCommand;
