//! Logging setup.
//!
//! Log records go to stderr through `env_logger`, so they never interleave
//! with frames written to stdout.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
