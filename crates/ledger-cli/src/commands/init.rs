use std::path::PathBuf;

use ledger_core::{EntryStore, Ledger};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, LedgerConfig};
use crate::errors::CliError;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = match args.config_path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => resolve_config_path()?,
    };
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let ledger_path = match args.path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => ctx.ledger_path().to_path_buf(),
    };

    // Opening validates an existing file; an empty one is written so the
    // path is known to be usable.
    let mut ledger = Ledger::open(&ledger_path).map_err(CliError::from)?;
    let created = !ledger.store().exists();
    if created {
        ledger.persist().map_err(CliError::from)?;
    }

    write_config(&config_path, &LedgerConfig::new(ledger_path.clone()))?;

    if !ctx.quiet() {
        println!("Config written to {}", config_path.display());
        if created {
            println!("Created empty ledger at {}", ledger_path.display());
        } else {
            println!(
                "Using existing ledger at {} ({} entries)",
                ledger_path.display(),
                ledger.len()
            );
        }
    }
    Ok(())
}
