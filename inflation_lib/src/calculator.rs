//! Inflation arithmetic over a CPI series.
//!
//! Only the first and last observations matter: their ratio is the price
//! level change over the window. Results are rounded half-up to cents.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::InflationError;
use crate::types::{AdjustmentResult, CpiObservation, CpiSeries, Direction, InflationRateResult};

/// Fractional digits kept in computed amounts and rates.
pub const RESULT_SCALE: u32 = 2;

/// Move `amount` through time using the CPI change recorded in `series`.
///
/// `Forward` scales by `end_cpi / start_cpi`, `Reverse` by `start_cpi / end_cpi`.
pub fn adjust(
    amount: Decimal,
    series: &CpiSeries,
    direction: Direction,
) -> Result<AdjustmentResult, InflationError> {
    let (start, end) = endpoints(series)?;

    let (numerator, divisor) = match direction {
        Direction::Forward => (end, start),
        Direction::Reverse => (start, end),
    };
    let ratio = numerator
        .value
        .checked_div(divisor.value)
        .ok_or(InflationError::DivisionByZero { date: divisor.date })?;
    let adjusted = amount
        .checked_mul(ratio)
        .ok_or(InflationError::AmountOutOfRange)?;

    Ok(AdjustmentResult {
        start_date: start.date,
        end_date: end.date,
        original_amount: amount,
        adjusted_amount: round_result(adjusted),
    })
}

/// Percentage change between the first and last CPI value.
pub fn inflation_rate(series: &CpiSeries) -> Result<InflationRateResult, InflationError> {
    let (start, end) = endpoints(series)?;

    let change = end
        .value
        .checked_sub(start.value)
        .ok_or(InflationError::AmountOutOfRange)?
        .checked_div(start.value)
        .ok_or(InflationError::DivisionByZero { date: start.date })?;
    let rate = change
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(InflationError::AmountOutOfRange)?;

    Ok(InflationRateResult {
        start_date: start.date,
        end_date: end.date,
        start_cpi: start.value,
        end_cpi: end.value,
        inflation_rate: round_result(rate),
    })
}

fn endpoints(series: &CpiSeries) -> Result<(CpiObservation, CpiObservation), InflationError> {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => Ok((*first, *last)),
        _ => Err(InflationError::InsufficientData),
    }
}

fn round_result(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RESULT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
