//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Date, amount and position parsing (`parsing`)
//! - Interactive prompts built on `dialoguer` (`input`)

mod input;
mod parsing;

// Re-export public API
pub use input::{prompt_entry_fields, prompt_optional, prompt_required};
pub use parsing::{
    parse_amount, parse_date, parse_index, parse_optional_amount, parse_optional_date,
    parse_output_format, OutputFormat,
};
