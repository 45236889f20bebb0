//! JSON file storage backend.
//!
//! The file holds a JSON array of four-key records, indented with four
//! spaces. Non-ASCII text is written as-is. Saves go through a temp file
//! and a rename, so a failed write leaves the previous file intact.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::entry::Entry;
use crate::error::{LedgerError, Result};
use crate::storage::traits::EntryStore;

const INDENT: &[u8] = b"    ";

/// Stores the ledger as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render entries exactly as they are written to disk.
    pub fn encode(entries: &[Entry]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        entries
            .serialize(&mut serializer)
            .map_err(|e| LedgerError::StorageWrite(format!("Failed to serialize entries: {}", e)))?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Parse file contents. Blank content is an empty ledger.
    pub fn decode(contents: &str) -> Result<Vec<Entry>> {
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(contents)?)
    }
}

impl EntryStore for JsonFileStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<Vec<Entry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(read_error(&self.path, err)),
        };

        let entries = Self::decode(&contents).map_err(|err| match err {
            LedgerError::StorageFormat(msg) => {
                LedgerError::StorageFormat(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        })?;
        debug!(path = %self.path.display(), count = entries.len(), "loaded ledger file");
        Ok(entries)
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let data = Self::encode(entries)?;
        crate::fs::write_atomic(&self.path, &data).map_err(|e| {
            LedgerError::StorageWrite(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), count = entries.len(), "saved ledger file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn read_error(path: &Path, err: io::Error) -> LedgerError {
    LedgerError::StorageRead(format!("Failed to read {}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new(
                NaiveDate::from_ymd_opt(2020, 10, 5).unwrap(),
                "Income",
                60000.0,
                "Salary",
            ),
            Entry::new(
                NaiveDate::from_ymd_opt(2020, 10, 7).unwrap(),
                "Expense",
                3500.0,
                "Groceries for the week",
            ),
        ]
    }

    #[test]
    fn test_encode_layout() {
        let encoded = String::from_utf8(JsonFileStore::encode(&sample()[..1]).unwrap()).unwrap();
        let expected = "[\n    {\n        \"Date\": \"2020-10-05\",\n        \"Category\": \"Income\",\n        \"Amount\": 60000.0,\n        \"Description\": \"Salary\"\n    }\n]\n";
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_encode_keeps_non_ascii() {
        let entries = vec![Entry::new(
            NaiveDate::from_ymd_opt(2020, 10, 5).unwrap(),
            "Доход",
            1.0,
            "Зарплата",
        )];
        let encoded = String::from_utf8(JsonFileStore::encode(&entries).unwrap()).unwrap();
        assert!(encoded.contains("\"Доход\""));
        assert!(encoded.contains("\"Зарплата\""));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(!store.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_blank_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blank.json");
        fs::write(&path, "  \n").unwrap();
        assert!(JsonFileStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("finances.json"));
        store.save(&sample()).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_corrupt_file_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        fs::write(&path, "{\"Date\": ").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, LedgerError::StorageFormat(_)));
        assert!(err.to_string().contains("corrupt.json"));
    }

    #[test]
    fn test_wrong_shape_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("object.json");
        fs::write(&path, r#"{"Date": "2020-10-05"}"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, LedgerError::StorageFormat(_)));
    }

    #[test]
    fn test_directory_path_is_read_error() {
        let dir = tempdir().unwrap();
        let err = JsonFileStore::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, LedgerError::StorageRead(_)));
    }

    #[test]
    fn test_save_into_directory_path_is_write_error() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("taken");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        let err = JsonFileStore::new(&target).save(&sample()).unwrap_err();
        assert!(matches!(err, LedgerError::StorageWrite(_)));
    }
}
