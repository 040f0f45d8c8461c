//! Dispatch-specific error types
//!
//! Errors that can occur while invoking the remote-shell transport.

use thiserror::Error;

/// Errors that can occur while dispatching a command to a host
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Failed to spawn the transport process
    #[error("Failed to spawn transport: {0}")]
    Spawn(String),
}
