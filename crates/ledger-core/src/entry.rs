//! The ledger's record type.
//!
//! An `Entry` is exactly what lands on disk: four keys, in order,
//! `Date`, `Category`, `Amount`, `Description`.

use std::fmt;

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// Canonical textual form of an entry date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Category counted as income by [`crate::Ledger::balance`].
pub const INCOME: &str = "Income";

/// Category counted as expense by [`crate::Ledger::balance`].
pub const EXPENSE: &str = "Expense";

/// Largest magnitude an `f64` holds without losing integer precision (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One dated financial record.
///
/// An amount read from disk as a JSON integer (`60000`) is written back as
/// an integer; amounts built in memory are written as floats (`60000.0`).
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct Entry {
    /// Calendar date, stored as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Free-form label; `Income` and `Expense` feed the balance
    pub category: String,

    /// Signed amount, stored as a JSON number
    pub amount: f64,

    /// Free-form description
    pub description: String,

    integral_amount: bool,
}

/// On-disk shape of an entry, keeping the amount's JSON number type.
#[derive(Deserialize)]
struct EntryRecord {
    #[serde(rename = "Date", deserialize_with = "deserialize_date")]
    date: NaiveDate,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount")]
    amount: serde_json::Number,
    #[serde(rename = "Description")]
    description: String,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = String;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        let amount = record
            .amount
            .as_f64()
            .ok_or_else(|| format!("amount {} is not representable", record.amount))?;
        Ok(Self {
            date: record.date,
            category: record.category,
            amount,
            description: record.description,
            integral_amount: record.amount.is_i64() || record.amount.is_u64(),
        })
    }
}

impl Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("Entry", 4)?;
        record.serialize_field("Date", &self.date_string())?;
        record.serialize_field("Category", &self.category)?;
        match self.stored_integer() {
            Some(amount) => record.serialize_field("Amount", &amount)?,
            None => record.serialize_field("Amount", &self.amount)?,
        }
        record.serialize_field("Description", &self.description)?;
        record.end()
    }
}

/// Equality over the four recorded fields; `60000` on disk equals `60000.0` in memory.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
            && self.category == other.category
            && self.amount == other.amount
            && self.description == other.description
    }
}

impl Entry {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: description.into(),
            integral_amount: false,
        }
    }

    /// The `YYYY-MM-DD` rendering used for storage and search.
    pub fn date_string(&self) -> String {
        format_date(self.date)
    }

    pub fn is_income(&self) -> bool {
        self.category == INCOME
    }

    pub fn is_expense(&self) -> bool {
        self.category == EXPENSE
    }

    /// The amount as an integer, when it was read as one and is still whole.
    fn stored_integer(&self) -> Option<i64> {
        let whole = self.amount.fract() == 0.0 && self.amount.abs() <= MAX_EXACT_INTEGER;
        (self.integral_amount && whole).then(|| self.amount as i64)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date_string(),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Format a date in canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Session-stable identifier of an entry.
///
/// Ids are generated when an entry enters the ledger (append or load) and
/// are not persisted; the store keeps the plain four-field record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|e| {
        serde::de::Error::custom(format!("invalid date {:?} (expected YYYY-MM-DD): {}", value, e))
    })
}
