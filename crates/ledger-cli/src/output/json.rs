//! JSON output formatting for entries and balances.

use ledger_core::{Balance, Entry};

/// Convert an entry and its position to JSON for output.
pub fn entry_json(index: usize, entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "index": index,
        "date": entry.date_string(),
        "category": entry.category,
        "amount": entry.amount,
        "description": entry.description,
    })
}

/// Convert multiple entries to JSON array for output.
pub fn entries_json(rows: &[(usize, &Entry)]) -> Vec<serde_json::Value> {
    rows.iter()
        .map(|(index, entry)| entry_json(*index, entry))
        .collect()
}

pub fn balance_json(balance: &Balance) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(balance)
}
