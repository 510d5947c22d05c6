use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use inflation_lib::{gateway, InflationEngine};

use crate::output::print_json;

#[derive(Args)]
pub struct InvokeArgs {
    /// JSON event file (API Gateway proxy shape). Reads stdin when omitted or "-".
    #[arg(long)]
    pub event: Option<PathBuf>,
}

pub async fn run(args: &InvokeArgs, engine: &InflationEngine) -> Result<()> {
    let raw = match &args.event {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event file {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read event from stdin")?;
            buf
        }
    };

    let response = gateway::handle_raw(&raw, engine).await;
    print_json(&response);
    Ok(())
}
