//! Command dispatch module
//!
//! Runs a command on target hosts through an external remote-shell
//! transport (`ssh` by default):
//! - One child process per host, strictly blocking
//! - Stdio inherited, so remote output streams straight to the console
//! - Exit status returned but never interpreted

mod error;
mod runner;

// Public exports
pub use error::DispatchError;
pub use runner::{DEFAULT_TRANSPORT, Dispatcher};
