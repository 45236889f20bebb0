//! Parsing helpers for dates, amounts, positions and output format.
//!
//! The core takes typed values only; everything the user types goes
//! through here first.

use chrono::NaiveDate;
use ledger_core::DATE_FORMAT;

use crate::errors::CliError;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        CliError::invalid_input(format!(
            "Invalid date (expected YYYY-MM-DD): {}",
            value.trim()
        ))
    })
}

/// Parse a finite decimal amount. A comma decimal separator is accepted.
pub fn parse_amount(value: &str) -> Result<f64, CliError> {
    let normalized = value.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(CliError::invalid_input(format!(
            "Invalid amount: {}",
            value.trim()
        ))),
    }
}

/// Parse a 0-based entry position. Negative numbers are rejected here,
/// since the core addresses entries with `usize`.
pub fn parse_index(value: &str) -> Result<usize, CliError> {
    let trimmed = value.trim();
    let parsed: i64 = trimmed
        .parse()
        .map_err(|_| CliError::invalid_input(format!("Invalid entry index: {}", trimmed)))?;
    usize::try_from(parsed).map_err(|_| {
        CliError::not_found(
            format!("Index {} is out of range", parsed),
            "Hint: Entry positions start at 0. Run `ledger list` to see them.",
        )
    })
}

/// Blank input means "no filter".
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, CliError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

/// Blank input means "no filter".
pub fn parse_optional_amount(value: Option<&str>) -> Result<Option<f64>, CliError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_amount(value).map(Some),
    }
}

/// Output format for list-style commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format (table, plain).
pub fn parse_output_format(value: Option<&str>) -> Result<Option<OutputFormat>, CliError> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid format: {} (use table or plain)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2020-10-05 ").unwrap(),
            NaiveDate::from_ymd_opt(2020, 10, 5).unwrap()
        );
        assert!(parse_date("2020-02-30").is_err());
        assert!(parse_date("05.10.2020").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("60000").unwrap(), 60000.0);
        assert_eq!(parse_amount("12,5").unwrap(), 12.5);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0").unwrap(), 0);
        assert_eq!(parse_index(" 12 ").unwrap(), 12);

        let err = parse_index("-1").unwrap_err();
        assert!(matches!(err, CliError::NotFound { .. }));

        let err = parse_index("first").unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_blank_optional_filters() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
        assert_eq!(parse_optional_amount(Some("")).unwrap(), None);
        assert_eq!(parse_optional_amount(Some("3500")).unwrap(), Some(3500.0));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }
}
