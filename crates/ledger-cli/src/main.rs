//! Ledger CLI - a small personal finance ledger
//!
//! This is the command-line interface for Ledger. It turns user input into
//! typed calls on `ledger_core::Ledger` and renders the results.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::{load_config, AppContext};
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_add, handle_balance, handle_completions, handle_edit, handle_init, handle_list,
    handle_menu, handle_search,
};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        return handle_completions(*shell);
    }

    let config = match load_config() {
        Ok(config) => config,
        // `init --force` is how a broken config gets replaced.
        Err(err) if matches!(cli.command, Some(Commands::Init(_))) => {
            eprintln!("Warning: {}", err);
            None
        }
        Err(err) => return Err(err),
    };
    logging::init(config.as_ref().and_then(|c| c.log.level.as_deref()));

    let ctx = AppContext::new(cli, config.as_ref())?;
    tracing::debug!(path = %ctx.ledger_path().display(), "resolved ledger path");

    match &ctx.cli().command {
        None | Some(Commands::Menu) => handle_menu(&ctx),
        Some(Commands::Init(args)) => handle_init(&ctx, args),
        Some(Commands::Add(args)) => handle_add(&ctx, args),
        Some(Commands::Edit(args)) => handle_edit(&ctx, args),
        Some(Commands::Search(args)) => handle_search(&ctx, args),
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Balance(args)) => handle_balance(&ctx, args),
        Some(Commands::Completions { shell }) => handle_completions(*shell),
    }
}
