//! Logger setup.
//!
//! Everything in the workspace logs through the `log` facade; the binary
//! installs `env_logger` once through [`init_logging`].

mod init;

pub use init::{init_logging, resolve_filter, LoggingConfig, DEFAULT_FILTER};
