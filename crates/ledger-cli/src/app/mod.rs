//! Application-level utilities for the Ledger CLI.
//!
//! This module provides:
//! - Path resolution for config and ledger files
//! - Opening the ledger with CLI-friendly errors

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{load_config, resolve_config_path};
