use anyhow::Result;
use inflation_lib::{AdjustmentResult, Direction, InflationRateResult};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct AdjustmentRow {
    #[tabled(rename = "Direction")]
    #[serde(rename = "Direction")]
    direction: String,
    #[tabled(rename = "From")]
    #[serde(rename = "From")]
    start_date: String,
    #[tabled(rename = "To")]
    #[serde(rename = "To")]
    end_date: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    original: String,
    #[tabled(rename = "Adjusted")]
    #[serde(rename = "Adjusted")]
    adjusted: String,
}

#[derive(Tabled, Serialize)]
struct RateRow {
    #[tabled(rename = "From")]
    #[serde(rename = "From")]
    start_date: String,
    #[tabled(rename = "To")]
    #[serde(rename = "To")]
    end_date: String,
    #[tabled(rename = "Start CPI")]
    #[serde(rename = "Start CPI")]
    start_cpi: String,
    #[tabled(rename = "End CPI")]
    #[serde(rename = "End CPI")]
    end_cpi: String,
    #[tabled(rename = "Inflation")]
    #[serde(rename = "Inflation")]
    inflation: String,
}

fn build_adjustment_rows(result: &AdjustmentResult, direction: Direction) -> Vec<AdjustmentRow> {
    vec![AdjustmentRow {
        direction: direction.to_string(),
        start_date: result.start_date.to_string(),
        end_date: result.end_date.to_string(),
        original: format_money(result.original_amount),
        adjusted: format_money(result.adjusted_amount),
    }]
}

fn build_rate_rows(result: &InflationRateResult) -> Vec<RateRow> {
    vec![RateRow {
        start_date: result.start_date.to_string(),
        end_date: result.end_date.to_string(),
        start_cpi: result.start_cpi.to_string(),
        end_cpi: result.end_cpi.to_string(),
        inflation: format!("{:.2}%", result.inflation_rate),
    }]
}

// -- Adjustment output --

pub fn print_adjustment(
    result: &AdjustmentResult,
    direction: Direction,
    format: &OutputFormat,
) -> Result<()> {
    let rows = build_adjustment_rows(result, direction);
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => print_markdown(rows),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(result),
    }
    Ok(())
}

// -- Rate output --

pub fn print_rate(result: &InflationRateResult, format: &OutputFormat) -> Result<()> {
    let rows = build_rate_rows(result);
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => print_markdown(rows),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(result),
    }
    Ok(())
}

fn print_markdown<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

fn print_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// `$1,234.50` style, always two decimals.
fn format_money(value: Decimal) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}
