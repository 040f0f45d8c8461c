//! fleetrun-core - Core library for fleetrun
//!
//! This library provides the two building blocks of the fleet runner:
//! hosts configuration parsing (`config`) and sequential per-host command
//! dispatch through an external remote-shell transport (`dispatch`).

pub mod config;
pub mod dispatch;

// Re-export the common surface for CLI consumers
pub use config::{ConfigError, read_hosts};
pub use dispatch::{DEFAULT_TRANSPORT, DispatchError, Dispatcher};
