//! Storage engine trait definition.
//!
//! The `EntryStore` trait is the durable-store capability the `Ledger`
//! depends on. Backends only move whole entry sequences in and out; all
//! query and mutation logic stays in the ledger.

use crate::entry::Entry;
use crate::error::Result;

/// Load-all / save-all interface for ledger backends.
///
/// Implementations must ensure:
/// - A store that does not exist yet loads as an empty sequence
/// - `save` replaces the full contents; it never appends
/// - Entry order is preserved exactly
pub trait EntryStore {
    /// Whether the store currently holds persisted data.
    fn exists(&self) -> bool;

    /// Read every entry, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageRead` if the store exists but cannot be
    /// read, and `LedgerError::StorageFormat` if its content is not a valid
    /// entry list.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Overwrite the store with `entries`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageWrite` if the data could not be written.
    fn save(&mut self, entries: &[Entry]) -> Result<()>;

    /// Human-readable location, for messages and logs.
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_entry_store<T: EntryStore>(_store: T) {}
        fn _accepts_dyn_entry_store(_store: &mut dyn EntryStore) {}
    }
}
