//! The ledger: an ordered, persisted sequence of entries.
//!
//! Every mutation is written through to the store before it returns. If the
//! write fails, the mutation is undone in memory and the error is returned,
//! so the in-memory sequence never runs ahead of the store.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::balance::Balance;
use crate::entry::{Entry, EntryId};
use crate::error::{LedgerError, Result};
use crate::filter::EntryFilter;
use crate::storage::{EntryStore, JsonFileStore};

/// Ordered entries plus the store they are mirrored to.
///
/// Positions are 0-based and double as the user-facing identity for edits.
/// Each entry also carries an [`EntryId`] that stays fixed for the lifetime
/// of this value.
#[derive(Debug)]
pub struct Ledger<S: EntryStore = JsonFileStore> {
    store: S,
    entries: Vec<Entry>,
    // Parallel to `entries`.
    ids: Vec<EntryId>,
}

impl Ledger<JsonFileStore> {
    /// Open the ledger file at `path`. A missing file is an empty ledger.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_store(JsonFileStore::new(path.as_ref()))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl<S: EntryStore> Ledger<S> {
    /// Build a ledger over `store`, loading whatever it holds.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::StorageFormat` if the store content is corrupt,
    /// or `LedgerError::StorageRead` if it exists but cannot be read.
    pub fn with_store(store: S) -> Result<Self> {
        let mut ledger = Self {
            store,
            entries: Vec::new(),
            ids: Vec::new(),
        };
        ledger.load()?;
        Ok(ledger)
    }

    /// Replace in-memory state with the store's contents.
    ///
    /// Ids are reassigned. On error the current state is kept.
    pub fn load(&mut self) -> Result<()> {
        let entries = self.store.load()?;
        self.ids = entries.iter().map(|_| EntryId::new()).collect();
        self.entries = entries;
        debug!(
            store = %self.store.location(),
            count = self.entries.len(),
            "ledger loaded"
        );
        Ok(())
    }

    /// Write the full sequence to the store.
    pub fn persist(&mut self) -> Result<()> {
        self.store.save(&self.entries)
    }

    /// Append a new entry at the end and persist.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` for a non-finite amount and
    /// `LedgerError::StorageWrite` if the store could not be written; in both
    /// cases the ledger is left unchanged.
    pub fn append(
        &mut self,
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<EntryId> {
        let entry = Entry::new(date, category, amount, description);
        validate(&entry)?;

        let id = EntryId::new();
        self.entries.push(entry);
        self.ids.push(id);

        if let Err(err) = self.persist() {
            warn!(store = %self.store.location(), error = %err, "append not persisted, rolling back");
            self.entries.pop();
            self.ids.pop();
            return Err(err);
        }
        debug!(%id, index = self.entries.len() - 1, "entry appended");
        Ok(id)
    }

    /// Replace the entry at `index` wholesale and persist.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::IndexOutOfRange` if `index >= len()`. Other
    /// errors as for [`Ledger::append`]. The ledger is unchanged on error.
    pub fn update(
        &mut self,
        index: usize,
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<()> {
        let id = self.id_at(index).ok_or(LedgerError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })?;
        self.update_by_id(id, date, category, amount, description)
    }

    /// Replace the entry identified by `id` wholesale and persist.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::EntryNotFound` for an unknown id. Other errors
    /// as for [`Ledger::append`]. The ledger is unchanged on error.
    pub fn update_by_id(
        &mut self,
        id: EntryId,
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<()> {
        let index = self.position_of(id).ok_or(LedgerError::EntryNotFound(id))?;
        let entry = Entry::new(date, category, amount, description);
        validate(&entry)?;

        let previous = std::mem::replace(&mut self.entries[index], entry);
        if let Err(err) = self.persist() {
            warn!(store = %self.store.location(), error = %err, "update not persisted, rolling back");
            self.entries[index] = previous;
            return Err(err);
        }
        debug!(%id, index, "entry updated");
        Ok(())
    }

    /// Entries matching every supplied filter, in ledger order.
    pub fn search(&self, filter: &EntryFilter) -> Vec<&Entry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Positions of the entries [`Ledger::search`] would return.
    pub fn search_positions(&self, filter: &EntryFilter) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| filter.matches(e))
            .map(|(index, _)| index)
            .collect()
    }

    /// Income, expense and net totals.
    pub fn balance(&self) -> Balance {
        Balance::from_entries(&self.entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn get_by_id(&self, id: EntryId) -> Option<&Entry> {
        self.position_of(id).map(|index| &self.entries[index])
    }

    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.ids.get(index).copied()
    }

    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    /// `(id, entry)` pairs in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &Entry)> + '_ {
        self.ids.iter().copied().zip(self.entries.iter())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn validate(entry: &Entry) -> Result<()> {
    if !entry.amount.is_finite() {
        return Err(LedgerError::InvalidInput(format!(
            "Amount must be a finite number, got {}",
            entry.amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 10, d).unwrap()
    }

    fn seeded() -> Ledger<MemoryStore> {
        let mut ledger = Ledger::with_store(MemoryStore::new()).unwrap();
        ledger.append(day(5), "Income", 60000.0, "Salary").unwrap();
        ledger.append(day(7), "Expense", 3500.0, "Groceries").unwrap();
        ledger
    }

    #[test]
    fn test_new_store_is_empty() {
        let ledger = Ledger::with_store(MemoryStore::new()).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.balance(), Balance::default());
    }

    #[test]
    fn test_append_grows_by_one_and_persists() {
        let mut ledger = seeded();
        let id = ledger.append(day(9), "Income", 70000.0, "Salary").unwrap();

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.get(2).unwrap().date_string(), "2020-10-09");
        assert_eq!(ledger.id_at(2), Some(id));
        assert_eq!(ledger.store().saved(), ledger.entries());
        assert_eq!(ledger.store().save_count(), 3);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut ledger = seeded();
        let before = ledger.entries().to_vec();
        let id = ledger.id_at(0).unwrap();

        ledger.update(0, day(5), "Income", 70000.0, "Salary").unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(0).unwrap().amount, 70000.0);
        assert_eq!(ledger.get(1), before.get(1));
        assert_eq!(ledger.id_at(0), Some(id));
        assert_eq!(ledger.store().saved(), ledger.entries());
    }

    #[test]
    fn test_update_out_of_range_leaves_ledger_untouched() {
        let mut ledger = seeded();
        let before = ledger.entries().to_vec();
        let saves = ledger.store().save_count();

        let err = ledger
            .update(2, day(1), "Income", 1.0, "nope")
            .unwrap_err();

        assert!(matches!(err, LedgerError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(ledger.entries(), before.as_slice());
        assert_eq!(ledger.store().save_count(), saves);
    }

    #[test]
    fn test_update_by_unknown_id() {
        let mut ledger = seeded();
        let stray = EntryId::new();
        let err = ledger
            .update_by_id(stray, day(1), "Income", 1.0, "")
            .unwrap_err();
        assert!(matches!(err, LedgerError::EntryNotFound(id) if id == stray));
    }

    #[test]
    fn test_ids_follow_entries() {
        let ledger = seeded();
        let id = ledger.id_at(1).unwrap();
        assert_eq!(ledger.position_of(id), Some(1));
        assert_eq!(ledger.get_by_id(id).unwrap().description, "Groceries");

        let pairs: Vec<_> = ledger.iter().map(|(id, e)| (id, e.amount)).collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], (id, 3500.0));
    }

    #[test]
    fn test_search_composes_with_and() {
        let ledger = seeded();

        let income = ledger.search(&EntryFilter::new().category("Income"));
        assert_eq!(income, vec![&ledger.entries()[0]]);

        let by_amount = ledger.search(&EntryFilter::new().amount(3500.0));
        assert_eq!(by_amount, vec![&ledger.entries()[1]]);

        let both = ledger.search(&EntryFilter::new().category("Income").amount(3500.0));
        assert!(both.is_empty());

        let by_date = ledger.search(&EntryFilter::new().date(day(7)));
        assert_eq!(by_date.len(), 1);
        assert_eq!(by_date[0].description, "Groceries");
    }

    #[test]
    fn test_search_without_filters_returns_all_in_order() {
        let ledger = seeded();
        let all = ledger.search(&EntryFilter::new());
        let expected: Vec<&Entry> = ledger.entries().iter().collect();
        assert_eq!(all, expected);
        assert_eq!(ledger.search_positions(&EntryFilter::new()), vec![0, 1]);
    }

    #[test]
    fn test_search_positions_match_search() {
        let mut ledger = seeded();
        ledger.append(day(9), "Income", 70000.0, "Salary").unwrap();
        let filter = EntryFilter::new().category("Income");
        assert_eq!(ledger.search_positions(&filter), vec![0, 2]);
    }

    #[test]
    fn test_balance() {
        let ledger = seeded();
        assert_eq!(ledger.balance().as_tuple(), (60000.0, 3500.0, 56500.0));
    }

    #[test]
    fn test_failed_append_rolls_back() {
        let ledger = seeded();
        let before = ledger.entries().to_vec();

        let mut store = ledger.store().clone();
        store.fail_saves(1);
        let mut ledger = Ledger::with_store(store).unwrap();

        let err = ledger.append(day(9), "Income", 1.0, "lost").unwrap_err();
        assert!(matches!(err, LedgerError::StorageWrite(_)));
        assert_eq!(ledger.entries(), before.as_slice());
        assert_eq!(ledger.store().saved(), before.as_slice());

        // The next write goes through.
        ledger.append(day(9), "Income", 1.0, "kept").unwrap();
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_failed_update_rolls_back() {
        let ledger = seeded();

        let mut store = ledger.store().clone();
        store.fail_saves(1);
        let mut ledger = Ledger::with_store(store).unwrap();

        let err = ledger.update(0, day(6), "Expense", 1.0, "x").unwrap_err();
        assert!(err.is_storage());
        assert_eq!(ledger.get(0).unwrap().amount, 60000.0);
        assert_eq!(ledger.get(0).unwrap().category, "Income");
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let mut ledger = seeded();
        let err = ledger
            .append(day(9), "Income", f64::NAN, "bad")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));

        let err = ledger
            .update(0, day(9), "Income", f64::INFINITY, "bad")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(0).unwrap().amount, 60000.0);
    }

    #[test]
    fn test_negative_amounts_are_accepted() {
        let mut ledger = seeded();
        ledger.append(day(9), "Expense", -100.0, "Refund").unwrap();
        assert_eq!(ledger.balance().expense, 3400.0);
    }

    #[test]
    fn test_reload_reassigns_ids() {
        let mut ledger = seeded();
        let old = ledger.id_at(0).unwrap();
        ledger.load().unwrap();
        assert_eq!(ledger.len(), 2);
        assert_ne!(ledger.id_at(0), Some(old));
    }
}
