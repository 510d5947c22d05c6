mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use inflation_lib::{Config, Direction, InflationEngine};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "inflation")]
#[command(about = "Adjust amounts for US consumer price inflation using FRED CPI data")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// FRED API key. Overrides FRED_API_KEY.
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// What a past amount is worth at the end date
    Calc(commands::adjust::AdjustArgs),
    /// What an end-date amount was worth at the start date
    Reverse(commands::adjust::AdjustArgs),
    /// CPI inflation rate between two dates
    Rate(commands::rate::RateArgs),
    /// Run a serverless gateway event through the API handler
    Invoke(commands::invoke::InvokeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("inflation_lib=info".parse()?)
                .add_directive("inflation_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let mut config = Config::from_env();
    if let Some(key) = &cli.api_key {
        config.api_key = key.clone();
    }
    let engine = InflationEngine::new(&config)?;

    match &cli.command {
        Commands::Calc(args) => {
            commands::adjust::run(args, Direction::Forward, &engine, &format).await?
        }
        Commands::Reverse(args) => {
            commands::adjust::run(args, Direction::Reverse, &engine, &format).await?
        }
        Commands::Rate(args) => commands::rate::run(args, &engine, &format).await?,
        Commands::Invoke(args) => commands::invoke::run(args, &engine).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_calc_with_global_output() {
        let cli = Cli::try_parse_from([
            "inflation",
            "calc",
            "--amount",
            "1000",
            "--start-date",
            "2020-01-01",
            "--end-date",
            "2024-01-01",
            "--output",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.output, "json");
        match cli.command {
            Commands::Calc(args) => {
                assert_eq!(args.amount, "1000");
                assert_eq!(args.end_date.as_deref(), Some("2024-01-01"));
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn reverse_amount_defaults_to_one_hundred() {
        let cli = Cli::try_parse_from(["inflation", "reverse", "--start-date", "2020-01-01"])
            .unwrap();
        match cli.command {
            Commands::Reverse(args) => {
                assert_eq!(args.amount, "100");
                assert!(args.end_date.is_none());
            }
            _ => panic!("expected reverse"),
        }
    }

    #[test]
    fn rate_requires_start_date() {
        assert!(Cli::try_parse_from(["inflation", "rate"]).is_err());
    }
}
