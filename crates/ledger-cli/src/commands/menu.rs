//! Interactive menu: the default when no subcommand is given.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use ledger_core::Ledger;
use tracing::debug;

use crate::app::AppContext;
use crate::commands::entries::{build_filter, matching_rows};
use crate::errors::CliError;
use crate::helpers::{parse_index, prompt_entry_fields, prompt_optional, prompt_required};
use crate::output::{print_balance, print_entry_list};
use crate::ui::{error_line, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Balance,
    Add,
    Edit,
    Search,
    List,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 6] = [
        MenuItem::Balance,
        MenuItem::Add,
        MenuItem::Edit,
        MenuItem::Search,
        MenuItem::List,
        MenuItem::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuItem::Balance => "Show balance",
            MenuItem::Add => "Add entry",
            MenuItem::Edit => "Edit entry",
            MenuItem::Search => "Search entries",
            MenuItem::List => "List entries",
            MenuItem::Exit => "Exit",
        }
    }
}

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "The interactive menu needs a terminal.\nHint: Use `ledger add`, `ledger edit`, `ledger search` or `ledger balance`.",
        )
        .into());
    }

    // A corrupt ledger file is fatal here, as in every other command.
    let mut ledger = ctx.open_ledger()?;
    let ui = UiContext::interactive();
    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();

    if !ctx.quiet() {
        println!("Ledger: {} ({} entries)", ctx.ledger_path().display(), ledger.len());
    }

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an action")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| anyhow::anyhow!("Failed to read menu choice: {}", e))?;

        let item = match choice {
            Some(index) => MenuItem::ALL[index],
            // Esc / q
            None => MenuItem::Exit,
        };
        debug!(?item, "menu selection");

        if item == MenuItem::Exit {
            println!("Goodbye!");
            return Ok(());
        }

        if let Err(err) = run_item(item, &mut ledger, &ui, ctx.quiet()) {
            eprintln!("{}", error_line(&ui, &err.to_string()));
        }
    }
}

fn run_item(
    item: MenuItem,
    ledger: &mut Ledger,
    ui: &UiContext,
    quiet: bool,
) -> anyhow::Result<()> {
    match item {
        MenuItem::Balance => print_balance(ui, &ledger.balance()),
        MenuItem::Add => {
            let fields = prompt_entry_fields(None)?;
            ledger
                .append(fields.date, fields.category, fields.amount, fields.description)
                .map_err(CliError::from)?;
            println!("Added entry #{}", ledger.len() - 1);
            Ok(())
        }
        MenuItem::Edit => {
            if ledger.is_empty() {
                println!("The ledger is empty.");
                return Ok(());
            }
            let prompt = format!("Entry number to edit (0-{})", ledger.len() - 1);
            let index = parse_index(&prompt_required(&prompt, None)?)?;
            let current = ledger
                .get(index)
                .cloned()
                .ok_or_else(|| CliError::from(ledger_core::LedgerError::IndexOutOfRange {
                    index,
                    len: ledger.len(),
                }))?;

            let fields = prompt_entry_fields(Some(&current))?;
            ledger
                .update(
                    index,
                    fields.date,
                    fields.category,
                    fields.amount,
                    fields.description,
                )
                .map_err(CliError::from)?;
            println!("Updated entry #{}", index);
            Ok(())
        }
        MenuItem::Search => {
            let category = prompt_optional("Category (blank for any)")?;
            let date = prompt_optional("Date YYYY-MM-DD (blank for any)")?;
            let amount = prompt_optional("Amount (blank for any)")?;
            let filter = build_filter(Some(&category), Some(&date), Some(&amount))?;

            let rows = matching_rows(ledger, &filter);
            if rows.is_empty() {
                println!("Nothing found.");
                return Ok(());
            }
            println!("Search results:");
            print_entry_list(ui, &rows, quiet)
        }
        MenuItem::List => {
            let rows = matching_rows(ledger, &ledger_core::EntryFilter::new());
            print_entry_list(ui, &rows, quiet)
        }
        MenuItem::Exit => Ok(()),
    }
}
