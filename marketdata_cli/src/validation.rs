//! Input validation for command arguments.

use anyhow::{bail, Result};
use chrono::NaiveDate;

pub const MAX_TICKER_LENGTH: usize = 10;

/// Validate a ticker: trimmed, non-empty, letters/digits plus `. - ^ =`,
/// returned uppercased.
pub fn validate_ticker(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("ticker must not be empty");
    }
    if trimmed.len() > MAX_TICKER_LENGTH {
        bail!(
            "ticker '{}' is too long (max {} characters)",
            trimmed,
            MAX_TICKER_LENGTH
        );
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(*c, '.' | '-' | '^' | '=')))
    {
        bail!("ticker '{}' contains invalid character '{}'", trimmed, bad);
    }
    Ok(trimmed.to_uppercase())
}

/// Validate a date in YYYY-MM-DD format.
pub fn validate_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2016-03-22)",
            trimmed
        ),
    }
}

/// Validate that a date range is not inverted.
pub fn validate_range(from: NaiveDate, to: NaiveDate) -> Result<()> {
    if from > to {
        bail!("--from ({}) must not be after --to ({})", from, to);
    }
    Ok(())
}
