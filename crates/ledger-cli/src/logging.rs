//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never mix with command output.

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_ENV};

/// Initialize tracing for the process.
///
/// `LEDGER_LOG` wins over the config file's `[log] level`, which wins over
/// the default. Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config_level: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(config_level.unwrap_or(DEFAULT_LOG_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
