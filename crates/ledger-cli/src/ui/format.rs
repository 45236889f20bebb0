//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Render an amount the way it was entered: no trailing `.0` for whole numbers.
pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}

/// Amount with an explicit sign, for the net balance.
pub fn format_signed(amount: f64) -> String {
    if amount > 0.0 {
        format!("+{}", amount)
    } else {
        format_amount(amount)
    }
}
