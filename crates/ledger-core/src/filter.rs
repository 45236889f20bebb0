//! Equality filters for querying entries.

use chrono::NaiveDate;

use crate::entry::Entry;

/// Filter for [`crate::Ledger::search`].
///
/// Every supplied field must match (logical AND). Omitted fields match
/// unconditionally, so the default filter matches every entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    /// Exact category match
    pub category: Option<String>,

    /// Exact date match
    pub date: Option<NaiveDate>,

    /// Numeric amount match
    pub amount: Option<f64>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date.is_none() && self.amount.is_none()
    }

    /// Whether `entry` satisfies every supplied filter.
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(ref category) = self.category {
            if entry.category != *category {
                return false;
            }
        }
        if let Some(date) = self.date {
            if entry.date != date {
                return false;
            }
        }
        if let Some(amount) = self.amount {
            if entry.amount != amount {
                return false;
            }
        }
        true
    }
}
