//! # Ledger Core
//!
//! Core library for Ledger - a small, file-backed personal finance ledger.
//!
//! This crate provides the entry model, the query and balance logic, and the
//! storage abstraction, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **entry**: The four-field `Entry` record and its `EntryId`
//! - **ledger**: The `Ledger` itself (load, persist, append, update)
//! - **filter**: Equality filters for `Ledger::search`
//! - **balance**: Income/expense totals and the printable report
//! - **storage**: `EntryStore` trait, JSON file and in-memory backends
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use ledger_core::{EntryFilter, Ledger};
//!
//! # fn main() -> ledger_core::Result<()> {
//! let mut ledger = Ledger::open("finances.json")?;
//! let date = NaiveDate::from_ymd_opt(2020, 10, 5).unwrap();
//! ledger.append(date, "Income", 60000.0, "Salary")?;
//!
//! let salaries = ledger.search(&EntryFilter::new().category("Income"));
//! assert_eq!(salaries.len(), 1);
//! println!("{}", ledger.balance());
//! # Ok(())
//! # }
//! ```

pub mod balance;
pub mod entry;
pub mod error;
pub mod filter;
pub mod fs;
pub mod ledger;
pub mod storage;

pub use balance::Balance;
pub use entry::{Entry, EntryId, DATE_FORMAT, EXPENSE, INCOME};
pub use error::{LedgerError, Result};
pub use filter::EntryFilter;
pub use ledger::Ledger;
pub use storage::{EntryStore, JsonFileStore, MemoryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
