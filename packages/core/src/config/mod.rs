//! Hosts configuration module
//!
//! Reads the SSH deployment configuration file and extracts the ordered
//! list of target hosts:
//! - Line-oriented scan with `@bash_begin@`/`@bash_end@` skip blocks
//! - Comment (`#`) and blank lines ignored
//! - 5-field data lines, of which only the host column is kept

mod error;
mod reader;

// Public exports
pub use error::ConfigError;
pub use reader::{SKIP_BEGIN_MARKER, SKIP_END_MARKER, parse_hosts, read_hosts};
