//! Validation, CPI retrieval and calculation composed into one call.

use crate::calculator;
use crate::config::Config;
use crate::error::InflationError;
use crate::provider::CpiProvider;
use crate::types::{AdjustmentRequest, AdjustmentResult, InflationRateResult};
use crate::validation;

/// Answers adjustment requests. Holds no per-request state, so one engine
/// can serve any number of concurrent requests by shared reference.
pub struct InflationEngine {
    provider: CpiProvider,
}

impl InflationEngine {
    pub fn new(config: &Config) -> Result<Self, InflationError> {
        Ok(Self {
            provider: CpiProvider::new(config)?,
        })
    }

    pub async fn adjust(
        &self,
        request: &AdjustmentRequest,
    ) -> Result<AdjustmentResult, InflationError> {
        let (start, end) = validation::validate_range(&request.start_date, &request.end_date)?;
        let series = self.provider.fetch_cpi_series(start, end).await?;
        let result = calculator::adjust(request.amount, &series, request.direction)?;
        tracing::info!(
            "{} {} from {} to {} = {}",
            request.direction,
            request.amount,
            result.start_date,
            result.end_date,
            result.adjusted_amount
        );
        Ok(result)
    }

    pub async fn inflation_rate(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<InflationRateResult, InflationError> {
        let (start, end) = validation::validate_range(start_date, end_date)?;
        let series = self.provider.fetch_cpi_series(start, end).await?;
        calculator::inflation_rate(&series)
    }
}
