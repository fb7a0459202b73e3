//! The `history` subcommand: lists daily bars for a ticker between two dates.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::output::{print_bars_csv, print_bars_table, print_json, OutputFormat};
use crate::validation;

/// Arguments for the `history` subcommand.
#[derive(Args)]
pub struct HistoryArgs {
    /// Ticker symbol
    pub ticker: String,

    /// First date of the range (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,

    /// Last date of the range (YYYY-MM-DD)
    #[arg(long)]
    pub to: String,

    /// Fail on provider errors instead of printing an empty series
    #[arg(long)]
    pub strict: bool,
}

pub async fn run(args: &HistoryArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let ticker = validation::validate_ticker(&args.ticker)?;
    let from = validation::validate_date(&args.from)?;
    let to = validation::validate_date(&args.to)?;
    validation::validate_range(from, to)?;

    let client = settings.price_client()?;
    let bars = if args.strict {
        client.try_get_historical_fixings(&ticker, from, to).await?
    } else {
        client.get_historical_fixings(&ticker, from, to).await
    };

    eprintln!("{} bars for {} ({} to {})", bars.len(), ticker, from, to);

    match format {
        OutputFormat::Table => print_bars_table(&bars),
        OutputFormat::Json => print_json(&bars),
        OutputFormat::Csv => print_bars_csv(&bars)?,
    }

    Ok(())
}
