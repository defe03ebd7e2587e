//! Logging utilities.
//!
//! Centralizes logger installation behind the `log` facade: `env_logger`
//! natively, the browser console on wasm32.

mod init;

pub use init::{LoggingConfig, init_logging};
