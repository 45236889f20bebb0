//! Text and table output for entries and balances.

use ledger_core::{Balance, Entry};

use crate::ui::{balance_summary, entry_table, UiContext};

use super::json::{balance_json, entries_json};

/// Print `(position, entry)` rows in the resolved output mode.
pub fn print_entry_list(
    ctx: &UiContext,
    rows: &[(usize, &Entry)],
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(rows))?);
        return Ok(());
    }

    if rows.is_empty() {
        if !quiet {
            println!("No entries found.");
        }
        return Ok(());
    }

    println!("{}", entry_table(ctx, rows));
    Ok(())
}

pub fn print_balance(ctx: &UiContext, balance: &Balance) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&balance_json(balance)?)?);
    } else {
        println!("{}", balance_summary(ctx, balance));
    }
    Ok(())
}
