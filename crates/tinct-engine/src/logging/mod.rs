//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so
//! every binary embedding the engine bootstraps the same way.

mod init;

pub use init::{init_logging, LoggingConfig};
