use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder FRED uses in `value` when no figure was published for a date.
pub const MISSING_VALUE: &str = ".";

/// Body of a `series/observations` response.
///
/// Only `observations` is required; the surrounding metadata is kept for
/// diagnostics and tolerated when absent.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ObservationsResponse {
    #[serde(default)]
    pub realtime_start: Option<String>,
    #[serde(default)]
    pub realtime_end: Option<String>,
    #[serde(default)]
    pub observation_start: Option<String>,
    #[serde(default)]
    pub observation_end: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub output_type: Option<i64>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub order_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    pub observations: Vec<Observation>,
}

/// One dated data point. FRED sends `value` as a string, e.g. `"259.127"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Observation {
    #[serde(default)]
    pub realtime_start: Option<String>,
    #[serde(default)]
    pub realtime_end: Option<String>,
    pub date: NaiveDate,
    pub value: String,
}

impl Observation {
    /// True when the API had no figure for this date.
    pub fn is_missing(&self) -> bool {
        self.value.trim() == MISSING_VALUE
    }
}
