use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::InflationError;

/// The only accepted date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// True when `input` is a strict `YYYY-MM-DD` date that is not after today.
pub fn is_valid_date(input: &str) -> bool {
    is_valid_date_on(input, today())
}

/// Same as [`is_valid_date`] with an explicit "today".
pub fn is_valid_date_on(input: &str, today: NaiveDate) -> bool {
    validate_date_on(input, today).is_ok()
}

/// Validate a YYYY-MM-DD date string that must not lie in the future.
pub fn validate_date(input: &str) -> Result<NaiveDate, InflationError> {
    validate_date_on(input, today())
}

pub fn validate_date_on(input: &str, today: NaiveDate) -> Result<NaiveDate, InflationError> {
    let date = parse_strict(input).ok_or_else(|| {
        InflationError::Validation(format!(
            "invalid date '{}'. Dates must be in the YYYY-MM-DD format (e.g., 2020-01-01)",
            input
        ))
    })?;
    if date > today {
        return Err(InflationError::Validation(format!(
            "date '{}' is in the future (today is {})",
            input, today
        )));
    }
    Ok(date)
}

/// Validate both ends of a date range. The start may equal the end but not follow it.
pub fn validate_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), InflationError> {
    validate_range_on(start, end, today())
}

pub fn validate_range_on(
    start: &str,
    end: &str,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate), InflationError> {
    let start_date = validate_date_on(start, today)?;
    let end_date = validate_date_on(end, today)?;
    if start_date > end_date {
        return Err(InflationError::Validation(format!(
            "start date {} is after end date {}",
            start_date, end_date
        )));
    }
    Ok((start_date, end_date))
}

/// Parse a monetary amount. Plain (`1000`, `12.50`) and scientific (`1e3`)
/// notation are accepted; the sign is not checked.
pub fn parse_amount(input: &str) -> Result<Decimal, InflationError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            InflationError::Validation(format!(
                "invalid amount '{}'. Expected a number (e.g., 1000 or 12.50)",
                input
            ))
        })
}

// chrono alone accepts single-digit months/days and padded years, so the
// layout is checked byte by byte before handing over.
fn parse_strict(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let layout_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !layout_ok {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
