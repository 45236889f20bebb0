//! UI primitives for the Ledger CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Render**: Entry tables, balance summary, error lines
//! - **Format**: String utilities (truncate, amounts)

mod context;
pub mod format;
mod mode;
pub mod render;

// Re-export core types at module level
pub use context::UiContext;

pub use render::{balance_summary, entry_table, error_line};
