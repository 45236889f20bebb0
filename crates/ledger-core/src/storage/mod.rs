//! Storage layer for Ledger.
//!
//! This module provides:
//! - `EntryStore` trait: load-all / save-all interface for backends
//! - `JsonFileStore`: one pretty-printed JSON file per ledger
//! - `MemoryStore`: in-process store for tests and embedding

mod json_file;
mod memory;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::EntryStore;
