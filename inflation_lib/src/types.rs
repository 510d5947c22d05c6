//! Domain types shared by the provider, calculator and gateway.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// One CPI value published for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CpiObservation {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// CPI observations ordered ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CpiSeries {
    observations: Vec<CpiObservation>,
}

impl CpiSeries {
    /// Builds a series, sorting the observations by date.
    pub fn new(mut observations: Vec<CpiObservation>) -> Self {
        observations.sort_by_key(|o| o.date);
        Self { observations }
    }

    pub fn observations(&self) -> &[CpiObservation] {
        &self.observations
    }

    pub fn first(&self) -> Option<&CpiObservation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&CpiObservation> {
        self.observations.last()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// Which way an amount is moved through time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// A past amount expressed in end-date money.
    Forward,
    /// An end-date amount expressed in start-date money.
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "reverse" => Ok(Direction::Reverse),
            _ => Err(format!(
                "unknown direction '{}'. Valid values: forward, reverse",
                s
            )),
        }
    }
}

/// A single adjustment to perform. Dates are unvalidated `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentRequest {
    pub amount: Decimal,
    pub start_date: String,
    pub end_date: String,
    pub direction: Direction,
}

impl AdjustmentRequest {
    pub fn new(amount: Decimal, start_date: &str, end_date: &str, direction: Direction) -> Self {
        Self {
            amount,
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            direction,
        }
    }
}

/// Outcome of an adjustment. The dates are those of the first and last
/// observations the provider returned, which may be coarser than requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentResult {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(serialize_with = "as_number")]
    pub original_amount: Decimal,
    #[serde(serialize_with = "as_number")]
    pub adjusted_amount: Decimal,
}

/// Percentage change of the CPI between the first and last observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InflationRateResult {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(serialize_with = "as_number")]
    pub start_cpi: Decimal,
    #[serde(serialize_with = "as_number")]
    pub end_cpi: Decimal,
    #[serde(serialize_with = "as_number")]
    pub inflation_rate: Decimal,
}

// Goes through the decimal's string form so the emitted float is the one
// nearest to the printed value (`995.94`, not `995.9399999999999`).
fn as_number<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let number = value
        .to_string()
        .parse::<f64>()
        .map_err(<S::Error as serde::ser::Error>::custom)?;
    serializer.serialize_f64(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn obs(date: &str, value: Decimal) -> CpiObservation {
        CpiObservation {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            value,
        }
    }

    #[test]
    fn series_is_sorted_on_construction() {
        let series = CpiSeries::new(vec![
            obs("2020-03-01", dec!(258.076)),
            obs("2020-01-01", dec!(259.127)),
            obs("2020-02-01", dec!(259.250)),
        ]);
        let dates: Vec<String> = series
            .observations()
            .iter()
            .map(|o| o.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2020-01-01", "2020-02-01", "2020-03-01"]);
        assert_eq!(series.first().unwrap().value, dec!(259.127));
        assert_eq!(series.last().unwrap().value, dec!(258.076));
    }

    #[test]
    fn empty_series() {
        let series = CpiSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.first().is_none());
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("forward".parse::<Direction>().unwrap(), Direction::Forward);
        assert_eq!("Reverse".parse::<Direction>().unwrap(), Direction::Reverse);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Reverse).unwrap(),
            "\"reverse\""
        );
    }

    #[test]
    fn adjustment_result_serializes_amounts_as_numbers() {
        let result = AdjustmentResult {
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            original_amount: dec!(1000),
            adjusted_amount: dec!(995.94),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["start_date"], "2020-01-01");
        assert_eq!(value["end_date"], "2020-03-01");
        assert_eq!(value["original_amount"].as_f64(), Some(1000.0));
        assert_eq!(value["adjusted_amount"].as_f64(), Some(995.94));
        assert_eq!(value.as_object().unwrap().len(), 4);
    }
}
