//! Interactive prompts for the menu.

use chrono::NaiveDate;
use dialoguer::Input;
use ledger_core::{Entry, EXPENSE, INCOME};

use super::parsing::{parse_amount, parse_date};

/// Parsed answers for the four entry fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFields {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

/// Prompt for a value that must not be empty.
pub fn prompt_required(prompt: &str, initial: Option<&str>) -> anyhow::Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    input
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
}

/// Prompt for a value that may be left blank.
pub fn prompt_optional(prompt: &str) -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))
}

/// Ask for date, category, amount and description, pre-filled from `current`.
///
/// Date and amount are parsed as soon as they are entered; a bad value
/// aborts the whole prompt so the menu can report it.
pub fn prompt_entry_fields(current: Option<&Entry>) -> anyhow::Result<EntryFields> {
    let date_text = current.map(|e| e.date_string());
    let date = parse_date(&prompt_required("Date (YYYY-MM-DD)", date_text.as_deref())?)?;

    let category_prompt = format!("Category ({}/{})", INCOME, EXPENSE);
    let category = prompt_required(&category_prompt, current.map(|e| e.category.as_str()))?;

    let amount_text = current.map(|e| e.amount.to_string());
    let amount = parse_amount(&prompt_required("Amount", amount_text.as_deref())?)?;

    let description = match current {
        Some(entry) => Input::<String>::new()
            .with_prompt("Description")
            .with_initial_text(entry.description.as_str())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?,
        None => prompt_optional("Description")?,
    };

    Ok(EntryFields {
        date,
        category: category.trim().to_string(),
        amount,
        description,
    })
}
