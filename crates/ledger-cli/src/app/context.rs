//! Application context for the Ledger CLI.
//!
//! Bundles CLI arguments with the loaded config so handlers do not
//! thread both through every call.

use std::path::{Path, PathBuf};

use ledger_core::Ledger;
use tracing::debug;

use crate::cli::Cli;
use crate::config::LedgerConfig;
use crate::errors::CliError;

use super::resolver::resolve_ledger_path;

pub struct AppContext<'a> {
    cli: &'a Cli,
    ledger_path: PathBuf,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli, config: Option<&LedgerConfig>) -> anyhow::Result<Self> {
        let ledger_path = resolve_ledger_path(cli, config)?;
        Ok(Self { cli, ledger_path })
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    /// Load the ledger. A missing file is an empty ledger.
    pub fn open_ledger(&self) -> anyhow::Result<Ledger> {
        debug!(path = %self.ledger_path.display(), "opening ledger");
        Ledger::open(&self.ledger_path).map_err(|e| CliError::from(e).into())
    }
}
