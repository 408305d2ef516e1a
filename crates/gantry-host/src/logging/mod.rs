//! Logger setup.
//!
//! One idempotent entry point over the `log` facade with an `env_logger`
//! backend. Call it early in `main`; later calls are no-ops.

mod init;

pub use init::{LoggingConfig, init_logging};
