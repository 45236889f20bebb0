//! Rendering helpers: entry tables, balance summary, error lines.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as ComfyTable};
use ledger_core::{Balance, Entry};
use owo_colors::OwoColorize;

use super::context::UiContext;
use super::format::{format_amount, format_signed, truncate};

const DESCRIPTION_MAX: usize = 60;

/// Render `(position, entry)` rows.
///
/// Pretty mode: bordered table with a header row.
/// Plain mode: tab-separated `index date category amount description`, no header.
pub fn entry_table(ctx: &UiContext, rows: &[(usize, &Entry)]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Date", "Category", "Amount", "Description"]);

        for (index, entry) in rows {
            table.add_row(vec![
                Cell::new(index).set_alignment(CellAlignment::Right),
                Cell::new(entry.date_string()),
                Cell::new(&entry.category),
                Cell::new(format_amount(entry.amount)).set_alignment(CellAlignment::Right),
                Cell::new(truncate(&entry.description, DESCRIPTION_MAX)),
            ]);
        }
        table.to_string()
    } else {
        rows.iter()
            .map(|(index, entry)| {
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    index,
                    entry.date_string(),
                    entry.category,
                    format_amount(entry.amount),
                    entry.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Balance summary. Pretty mode uses the boxed report with a colored net line.
pub fn balance_summary(ctx: &UiContext, balance: &Balance) -> String {
    if ctx.mode.is_pretty() {
        let report = balance.to_string();
        if !ctx.color {
            return report;
        }
        let net = format_signed(balance.net);
        let styled = if balance.net < 0.0 {
            net.red().to_string()
        } else {
            net.green().to_string()
        };
        format!("{}\nNet: {}", report, styled)
    } else {
        format!(
            "income={}\nexpense={}\nnet={}",
            format_amount(balance.income),
            format_amount(balance.expense),
            format_amount(balance.net)
        )
    }
}

/// Error line for the interactive menu.
pub fn error_line(ctx: &UiContext, message: &str) -> String {
    if ctx.color {
        format!("{} {}", "Error:".red().bold(), message)
    } else {
        format!("Error: {}", message)
    }
}
