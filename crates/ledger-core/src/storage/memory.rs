//! In-memory storage backend.

use crate::entry::Entry;
use crate::error::{LedgerError, Result};
use crate::storage::traits::EntryStore;

/// Keeps the "persisted" entries in a `Vec`.
///
/// `fail_saves` makes the next N saves return `StorageWrite`, which is how
/// tests exercise the ledger's rollback path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Vec<Entry>>,
    saves: usize,
    failures_pending: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `entries`.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            saved: Some(entries),
            ..Self::default()
        }
    }

    /// Fail the next `count` calls to `save`.
    pub fn fail_saves(&mut self, count: usize) {
        self.failures_pending = count;
    }

    /// Entries as of the last successful save.
    pub fn saved(&self) -> &[Entry] {
        self.saved.as_deref().unwrap_or(&[])
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl EntryStore for MemoryStore {
    fn exists(&self) -> bool {
        self.saved.is_some()
    }

    fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        if self.failures_pending > 0 {
            self.failures_pending -= 1;
            return Err(LedgerError::StorageWrite(
                "memory store configured to fail".to_string(),
            ));
        }
        self.saved = Some(entries.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
