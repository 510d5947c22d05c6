use anyhow::Result;
use chrono::Utc;
use clap::Args;
use inflation_lib::validation::{self, DATE_FORMAT};
use inflation_lib::{AdjustmentRequest, Direction, InflationEngine};

use crate::output::{print_adjustment, OutputFormat};

#[derive(Args)]
pub struct AdjustArgs {
    /// Amount to adjust (e.g. 1000 or 12.50)
    #[arg(long, default_value = "100")]
    pub amount: String,

    /// Start of the period, YYYY-MM-DD
    #[arg(long)]
    pub start_date: String,

    /// End of the period, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub end_date: Option<String>,
}

pub async fn run(
    args: &AdjustArgs,
    direction: Direction,
    engine: &InflationEngine,
    format: &OutputFormat,
) -> Result<()> {
    let amount = validation::parse_amount(&args.amount)?;
    let end_date = args
        .end_date
        .clone()
        .unwrap_or_else(|| Utc::now().date_naive().format(DATE_FORMAT).to_string());

    let request = AdjustmentRequest::new(amount, &args.start_date, &end_date, direction);
    let result = engine.adjust(&request).await?;

    print_adjustment(&result, direction, format)
}
