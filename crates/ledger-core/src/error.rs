//! Error types for Ledger core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

use crate::entry::EntryId;

/// Result type alias for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for Ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The store exists but could not be read
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// The store content is not a valid entry list
    #[error("Storage format error: {0}")]
    StorageFormat(String),

    /// Writing the store failed; the in-memory change was rolled back
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Position outside `[0, len)`
    #[error("Index {index} is out of range (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No entry carries this id
    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    /// True for errors raised by the durable store rather than by the caller.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            LedgerError::StorageRead(_)
                | LedgerError::StorageFormat(_)
                | LedgerError::StorageWrite(_)
        )
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::StorageFormat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = LedgerError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Index 5 is out of range (ledger has 2 entries)"
        );
        assert!(!err.is_storage());
    }

    #[test]
    fn test_serde_error_maps_to_format() {
        let err: LedgerError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, LedgerError::StorageFormat(_)));
        assert!(err.is_storage());
    }
}
