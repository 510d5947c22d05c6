use anyhow::Result;
use chrono::Utc;
use clap::Args;
use inflation_lib::validation::DATE_FORMAT;
use inflation_lib::InflationEngine;

use crate::output::{print_rate, OutputFormat};

#[derive(Args)]
pub struct RateArgs {
    /// Start of the period, YYYY-MM-DD
    #[arg(long)]
    pub start_date: String,

    /// End of the period, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub end_date: Option<String>,
}

pub async fn run(args: &RateArgs, engine: &InflationEngine, format: &OutputFormat) -> Result<()> {
    let end_date = args
        .end_date
        .clone()
        .unwrap_or_else(|| Utc::now().date_naive().format(DATE_FORMAT).to_string());

    let result = engine.inflation_rate(&args.start_date, &end_date).await?;
    print_rate(&result, format)
}
