//! Per-host command execution
//!
//! Builds and runs the transport invocation for a single host. The loop
//! over hosts lives with the caller; this module only knows how to run
//! one host and block until the child returns.

use std::io;
use std::process::{Command, ExitStatus};

use super::error::DispatchError;

/// Default remote-shell transport program
pub const DEFAULT_TRANSPORT: &str = "ssh";

/// Runs commands on remote hosts via an external transport binary
///
/// The invocation shape is fixed: `<transport> <host> <command>`, with the
/// command passed through as a single literal argument. Authentication and
/// host reachability are the transport's business.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    transport: String,
}

impl Dispatcher {
    /// Create a dispatcher using the default `ssh` transport
    pub fn new() -> Self {
        Self::with_transport(DEFAULT_TRANSPORT)
    }

    /// Create a dispatcher with a custom transport program
    pub fn with_transport(program: impl Into<String>) -> Self {
        Self {
            transport: program.into(),
        }
    }

    /// The transport program this dispatcher spawns
    pub fn transport(&self) -> &str {
        &self.transport
    }

    /// Build the invocation for one host: transport, host, literal command
    ///
    /// Stdin, stdout and stderr stay inherited, so remote output (and any
    /// interactive transport prompt) goes straight to the console.
    pub fn command(&self, host: &str, cmd: &str) -> Command {
        let mut invocation = Command::new(&self.transport);
        invocation.arg(host).arg(cmd);
        invocation
    }

    /// Run the command on one host, blocking until the child exits
    ///
    /// The exit status is returned but carries no meaning for the fleet
    /// run: a failing remote command is indistinguishable from a
    /// succeeding one. Only a spawn failure is an error.
    pub fn run(&self, host: &str, cmd: &str) -> Result<ExitStatus, DispatchError> {
        tracing::debug!("Spawning: {} {} {}", self.transport, host, cmd);

        let status = self.command(host, cmd).status().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                DispatchError::Spawn(format!(
                    "{} not found. Install an SSH client.",
                    self.transport
                ))
            } else {
                DispatchError::Spawn(e.to_string())
            }
        })?;

        tracing::debug!("{} exited with {}", host, status);
        Ok(status)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
