//! Path resolution for config and ledger files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_ledger_path, read_config, LedgerConfig};

/// Resolve the config file path, checking LEDGER_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("LEDGER_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Read the config file if there is one.
pub fn load_config() -> anyhow::Result<Option<LedgerConfig>> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Ok(None);
    }
    read_config(&config_path).map(Some)
}

/// Resolve the ledger file path: `--ledger`/`LEDGER_PATH`, then config, then default.
pub fn resolve_ledger_path(cli: &Cli, config: Option<&LedgerConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.ledger.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    if let Some(config) = config {
        return Ok(PathBuf::from(&config.ledger.path));
    }

    default_ledger_path()
}
