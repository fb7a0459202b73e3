//! The `quote` subcommand: shows the latest quote for one ticker.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::output::{print_json, print_quote_csv, print_quote_table, OutputFormat};
use crate::validation;

/// Arguments for the `quote` subcommand.
#[derive(Args)]
pub struct QuoteArgs {
    /// Ticker symbol (e.g. MSFT, BRK.B, ^GSPC)
    pub ticker: String,

    /// Fail on provider errors instead of printing an empty quote
    #[arg(long)]
    pub strict: bool,
}

pub async fn run(args: &QuoteArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let ticker = validation::validate_ticker(&args.ticker)?;
    let client = settings.price_client()?;

    let quote = if args.strict {
        client.try_get_quote(&ticker).await?
    } else {
        client.get_quote(&ticker).await
    };

    if quote.symbol.is_empty() {
        eprintln!("No quote returned for {}", ticker);
    }

    match format {
        OutputFormat::Table => print_quote_table(&quote),
        OutputFormat::Json => print_json(&quote),
        OutputFormat::Csv => print_quote_csv(&quote)?,
    }

    Ok(())
}
