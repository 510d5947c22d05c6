//! HTTP client for the FRED API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ObservationQuery, Query},
    types::ObservationsResponse,
    Error,
};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org";

const OBSERVATIONS_PATH: &str = "/fred/series/observations";

/// Request timeout for FRED API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the FRED API.
///
/// Every request carries the API key as the `api_key` query parameter.
/// Each call issues exactly one request; nothing is retried.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    api_key: String,
}

impl Client {
    /// Creates a new client pointing at the production FRED API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e.to_string())
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}{}", self.base_api_url, path);

        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e.without_url().to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e.without_url().to_string())
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(format!("{} | body: {}", e, snippet))
        })
    }

    /// Fetches the observations of one series over the query's date window.
    pub async fn get_series_observations(
        &self,
        query: &ObservationQuery,
    ) -> Result<ObservationsResponse, Error> {
        self.get::<ObservationsResponse, ObservationQuery>(OBSERVATIONS_PATH, query)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn url_carries_query_and_api_key() {
        let client = Client::with_base_url("http://localhost:1234/", "secret").unwrap();
        let query = ObservationQuery::new("CPIAUCSL")
            .with_observation_start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let url = client.get_url(OBSERVATIONS_PATH, &query).unwrap();

        assert_eq!(url.path(), "/fred/series/observations");
        let q = url.query().unwrap();
        assert!(q.contains("series_id=CPIAUCSL"));
        assert!(q.contains("observation_start=2020-01-01"));
        assert!(q.ends_with("api_key=secret"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let client = Client::with_base_url("not a url", "k").unwrap();
        let query = ObservationQuery::new("CPIAUCSL");
        assert!(matches!(
            client.get_url(OBSERVATIONS_PATH, &query),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_cuts_long_bodies() {
        let long = "x".repeat(2500);
        let out = truncate_body(&long);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn client_creation_with_defaults() {
        let client = Client::new("demo-key").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
