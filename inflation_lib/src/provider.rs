//! CPI series retrieval from FRED.
//!
//! Wraps the raw `fred_api` client: fixes the series id, converts string
//! values into decimals and turns an empty answer into a typed error. One
//! request per call; nothing is cached or retried.

use std::str::FromStr;

use chrono::NaiveDate;
use fred_api::types::Observation;
use fred_api::{Client, ObservationQuery};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::error::InflationError;
use crate::types::{CpiObservation, CpiSeries};

/// Consumer Price Index for All Urban Consumers: All Items in U.S. City Average.
pub const CPI_SERIES_ID: &str = "CPIAUCSL";

pub struct CpiProvider {
    inner: Client,
}

impl CpiProvider {
    pub fn new(config: &Config) -> Result<Self, InflationError> {
        Ok(Self {
            inner: Client::with_base_url(&config.base_url, &config.api_key)?,
        })
    }

    /// Fetches CPI observations for `[start, end]`, ascending by date.
    ///
    /// Observations FRED marks as missing are dropped. Fails with
    /// `EmptySeries` when nothing usable remains.
    pub async fn fetch_cpi_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<CpiSeries, InflationError> {
        let query = ObservationQuery::new(CPI_SERIES_ID)
            .with_observation_start(start)
            .with_observation_end(end);

        tracing::debug!("Fetching {} observations {} to {}", CPI_SERIES_ID, start, end);
        let resp = self.inner.get_series_observations(&query).await?;

        let series = to_series(&resp.observations)?;
        if series.is_empty() {
            tracing::info!("No {} observations between {} and {}", CPI_SERIES_ID, start, end);
            return Err(InflationError::EmptySeries { start, end });
        }
        tracing::debug!("Received {} observations", series.len());
        Ok(series)
    }
}

fn to_series(observations: &[Observation]) -> Result<CpiSeries, InflationError> {
    let mut parsed = Vec::with_capacity(observations.len());
    for obs in observations {
        if obs.is_missing() {
            tracing::warn!("Skipping missing CPI observation for {}", obs.date);
            continue;
        }
        let value = Decimal::from_str(obs.value.trim()).map_err(|e| {
            fred_api::Error::Decode(format!(
                "invalid CPI value '{}' for {}: {}",
                obs.value, obs.date, e
            ))
        })?;
        parsed.push(CpiObservation {
            date: obs.date,
            value,
        });
    }
    Ok(CpiSeries::new(parsed))
}
