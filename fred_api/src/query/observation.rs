//! Query builder for the `series/observations` endpoint.

use chrono::NaiveDate;
use url::Url;

use super::common::{Query, SortOrder};

/// Parameters for a `series/observations` request.
///
/// `file_type=json` is always sent; the API key is appended by the client.
#[derive(Clone, Debug)]
pub struct ObservationQuery {
    pub series_id: String,
    pub observation_start: Option<NaiveDate>,
    pub observation_end: Option<NaiveDate>,
    pub sort_order: Option<SortOrder>,
}

impl ObservationQuery {
    pub fn new(series_id: &str) -> Self {
        Self {
            series_id: series_id.to_string(),
            observation_start: None,
            observation_end: None,
            sort_order: None,
        }
    }

    /// First date (inclusive) of the observation window.
    pub fn with_observation_start(mut self, date: NaiveDate) -> Self {
        self.observation_start = Some(date);
        self
    }

    /// Last date (inclusive) of the observation window.
    pub fn with_observation_end(mut self, date: NaiveDate) -> Self {
        self.observation_end = Some(date);
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }
}

impl Query for ObservationQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("series_id", &self.series_id)
            .append_pair("file_type", "json");
        if let Some(start) = self.observation_start {
            url.query_pairs_mut()
                .append_pair("observation_start", &start.format("%Y-%m-%d").to_string());
        };
        if let Some(end) = self.observation_end {
            url.query_pairs_mut()
                .append_pair("observation_end", &end.format("%Y-%m-%d").to_string());
        };
        if let Some(sort_order) = self.sort_order {
            url.query_pairs_mut()
                .append_pair("sort_order", &sort_order.to_string());
        };
        url
    }
}
