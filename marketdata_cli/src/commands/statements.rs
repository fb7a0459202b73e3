//! The `statements` subcommand: lists annual financial statements for a ticker.

use anyhow::Result;
use clap::Args;

use crate::config::Settings;
use crate::output::{print_json, print_statements_csv, print_statements_table, OutputFormat};
use crate::validation;

/// Arguments for the `statements` subcommand.
///
/// Requires `MARKETDATA_EDGAR_APP_KEY`. Table and CSV output show a summary per
/// statement; JSON output carries every mapped field.
#[derive(Args)]
pub struct StatementsArgs {
    /// Ticker symbol
    pub ticker: String,
}

pub async fn run(args: &StatementsArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let ticker = validation::validate_ticker(&args.ticker)?;
    let client = settings.statement_client()?;
    let statements = client.get_financial_statements(&ticker).await?;

    eprintln!("{} statements for {}", statements.len(), ticker);

    match format {
        OutputFormat::Table => print_statements_table(&statements),
        OutputFormat::Json => print_json(&statements),
        OutputFormat::Csv => print_statements_csv(&statements)?,
    }

    Ok(())
}
