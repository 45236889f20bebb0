//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use ledger_core::LedgerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, entry position)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Ledger file unreadable, corrupt or unwritable
    Storage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Storage(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Storage(_) => exit_codes::STORAGE,
        }
    }
}

impl From<LedgerError> for CliError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::IndexOutOfRange { .. } => CliError::not_found(
                err.to_string(),
                "Hint: Run `ledger list` to see entry positions.",
            ),
            LedgerError::EntryNotFound(_) => {
                CliError::not_found(err.to_string(), "Hint: Run `ledger list` to see entries.")
            }
            LedgerError::InvalidInput(_) => CliError::InvalidInput(err.to_string()),
            LedgerError::StorageRead(_)
            | LedgerError::StorageFormat(_)
            | LedgerError::StorageWrite(_) => CliError::Storage(err.to_string()),
        }
    }
}

/// Exit code for any error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(ledger_err) = err.downcast_ref::<LedgerError>() {
        return match ledger_err {
            LedgerError::IndexOutOfRange { .. } | LedgerError::EntryNotFound(_) => {
                exit_codes::NOT_FOUND
            }
            LedgerError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::STORAGE,
        };
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_maps_to_not_found() {
        let err: CliError = LedgerError::IndexOutOfRange { index: 3, len: 1 }.into();
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
        assert!(err.to_string().contains("ledger list"));
    }

    #[test]
    fn test_storage_errors_map_to_storage_code() {
        let err: CliError = LedgerError::StorageFormat("bad".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::STORAGE);
    }

    #[test]
    fn test_exit_code_for_downcasts() {
        let err = anyhow::Error::new(CliError::invalid_input("nope"));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);

        let err = anyhow::Error::new(LedgerError::StorageWrite("disk".to_string()));
        assert_eq!(exit_code_for(&err), exit_codes::STORAGE);

        assert_eq!(exit_code_for(&anyhow::anyhow!("plain")), 1);
    }
}
