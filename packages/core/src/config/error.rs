//! Config-specific error types
//!
//! Errors that can occur while reading the hosts configuration file.

use thiserror::Error;

/// Errors that can occur while reading the hosts configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to open or read the config file
    #[error("Failed to read config file: {0}")]
    Io(String),

    /// Data line does not split into exactly 5 comma-separated fields
    #[error("Failed to parse config line ({0})")]
    MalformedLine(String),
}
