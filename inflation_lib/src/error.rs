//! Error types for the library layer.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while answering an adjustment request.
///
/// Every failure is returned to the caller as one of these variants; nothing
/// is retried and no partial result is produced.
#[derive(Error, Debug)]
pub enum InflationError {
    /// User-provided input failed validation. Detected before any network call.
    #[error("Invalid input: {0}")]
    Validation(String),
    /// The FRED API could not be reached or answered with a failure.
    #[error(transparent)]
    Provider(#[from] fred_api::Error),
    /// The provider answered successfully but had no observations in range.
    #[error("No CPI data found for the given date range ({start} to {end})")]
    EmptySeries { start: NaiveDate, end: NaiveDate },
    /// The calculator was handed a series with no observations.
    #[error("Insufficient CPI data to compute an adjustment")]
    InsufficientData,
    /// The CPI value used as divisor is zero.
    #[error("CPI value for {date} is zero")]
    DivisionByZero { date: NaiveDate },
    /// The adjusted amount does not fit in a decimal.
    #[error("Adjusted amount is out of range")]
    AmountOutOfRange,
}

/// Coarse classification of an [`InflationError`], used by boundary layers
/// to choose a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Provider,
    EmptySeries,
    InsufficientData,
    DivisionByZero,
    AmountOutOfRange,
}

impl InflationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Provider(_) => ErrorKind::Provider,
            Self::EmptySeries { .. } => ErrorKind::EmptySeries,
            Self::InsufficientData => ErrorKind::InsufficientData,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::AmountOutOfRange => ErrorKind::AmountOutOfRange,
        }
    }

    /// Diagnostic text, where one exists. For provider status failures this
    /// is the raw response body.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Validation(msg) => Some(msg.clone()),
            Self::Provider(e) => Some(e.detail().to_string()),
            _ => None,
        }
    }
}
