mod commands;
mod config;
mod output;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "marketdata")]
#[command(about = "Fetch equity quotes, daily history and annual financial statements")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current quote for a ticker
    Quote(commands::quote::QuoteArgs),
    /// List daily bars for a ticker over a date range
    History(commands::history::HistoryArgs),
    /// List annual financial statements for a ticker
    Statements(commands::statements::StatementsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marketdata=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = cli.output.clone();

    let settings = Settings::from_env();

    match &cli.command {
        Commands::Quote(args) => commands::quote::run(args, &settings, &format).await?,
        Commands::History(args) => commands::history::run(args, &settings, &format).await?,
        Commands::Statements(args) => commands::statements::run(args, &settings, &format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_table() {
        let cli = Cli::try_parse_from(["marketdata", "quote", "MSFT"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Table);
    }

    #[test]
    fn output_is_global() {
        let cli = Cli::try_parse_from(["marketdata", "quote", "MSFT", "--output", "csv"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Csv);
        let cli = Cli::try_parse_from(["marketdata", "--output", "json", "statements", "CDI"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn unknown_output_is_rejected() {
        assert!(Cli::try_parse_from(["marketdata", "--output", "xml", "quote", "MSFT"]).is_err());
    }
}
