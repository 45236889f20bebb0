//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (entry, config).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Ledger file could not be read, parsed or written.
    pub const STORAGE: i32 = 5;
}

/// Environment variable for the tracing filter.
pub const LOG_ENV: &str = "LEDGER_LOG";

/// Default tracing filter when neither env nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
