//! Locale-independent conversions for provider text values.
//!
//! Decimals always use `.` as the decimal separator and `,` as the group
//! separator, so results do not depend on the host environment.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parses a decimal, accepting `,` group separators in the integer part
/// (`1,234.00`). Separators after the decimal point are rejected.
pub(crate) fn parse_decimal(text: &str) -> Result<Decimal, String> {
    let trimmed = text.trim();
    let (integer, fraction) = trimmed.split_at(trimmed.find('.').unwrap_or(trimmed.len()));
    if fraction.contains(',') {
        return Err("group separator after decimal point".to_string());
    }
    let mut digits: String = integer.chars().filter(|c| *c != ',').collect();
    digits.push_str(fraction);
    Decimal::from_str(&digits).map_err(|e| e.to_string())
}

pub(crate) fn parse_flag(text: &str) -> Result<bool, String> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err("expected true or false".to_string())
    }
}

pub(crate) fn parse_integer(text: &str) -> Result<i32, String> {
    text.trim().parse::<i32>().map_err(|e| e.to_string())
}

/// Parses a calendar date, discarding any time-of-day component.
///
/// Accepts `YYYY-MM-DD` and `MM/DD/YYYY`, optionally followed by a time
/// separated by `T` or a space (`2016-07-28T00:00:00Z`, `7/28/2016 12:00:00 AM`).
pub(crate) fn parse_date(text: &str) -> Result<NaiveDate, String> {
    let trimmed = text.trim();
    let date_part = trimmed.split(&['T', ' '][..]).next().unwrap_or(trimmed);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
        .ok_or_else(|| format!("unrecognized date {:?}", trimmed))
}
