use anyhow::Result;
use marketdata_source::types::{FinancialStatement, HistoricalBar, Quote};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct QuoteRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Bid")]
    #[serde(rename = "Bid")]
    bid: String,
    #[tabled(rename = "Ask")]
    #[serde(rename = "Ask")]
    ask: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    open: String,
    #[tabled(rename = "Prev Close")]
    #[serde(rename = "Prev Close")]
    previous_close: String,
    #[tabled(rename = "Last")]
    #[serde(rename = "Last")]
    last: String,
}

#[derive(Tabled, Serialize)]
struct BarRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Adj Close")]
    #[serde(rename = "Adj Close")]
    adj_close: String,
}

#[derive(Tabled, Serialize)]
struct StatementRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Fiscal Year")]
    #[serde(rename = "Fiscal Year")]
    fiscal_year: i32,
    #[tabled(rename = "Period End")]
    #[serde(rename = "Period End")]
    period_end: String,
    #[tabled(rename = "Form")]
    #[serde(rename = "Form")]
    form_type: String,
    #[tabled(rename = "Revenue")]
    #[serde(rename = "Revenue")]
    total_revenue: String,
    #[tabled(rename = "Net Income")]
    #[serde(rename = "Net Income")]
    net_income: String,
    #[tabled(rename = "Total Assets")]
    #[serde(rename = "Total Assets")]
    total_assets: String,
    #[tabled(rename = "Total Liabilities")]
    #[serde(rename = "Total Liabilities")]
    total_liabilities: String,
    #[tabled(rename = "Equity")]
    #[serde(rename = "Equity")]
    equity: String,
}

fn build_quote_rows(quote: &Quote) -> Vec<QuoteRow> {
    vec![QuoteRow {
        symbol: quote.symbol.clone(),
        name: quote.name.clone(),
        bid: quote.bid.to_string(),
        ask: quote.ask.to_string(),
        open: quote.open.to_string(),
        previous_close: quote.previous_close.to_string(),
        last: quote.last.to_string(),
    }]
}

fn build_bar_rows(bars: &[HistoricalBar]) -> Vec<BarRow> {
    bars.iter()
        .map(|b| BarRow {
            date: b.date.format("%Y-%m-%d").to_string(),
            open: b.open.to_string(),
            high: b.high.to_string(),
            low: b.low.to_string(),
            close: b.close.to_string(),
            volume: b.volume.to_string(),
            adj_close: b.adj_close.to_string(),
        })
        .collect()
}

fn build_statement_rows(statements: &[FinancialStatement]) -> Vec<StatementRow> {
    statements
        .iter()
        .map(|s| StatementRow {
            symbol: s.primary_symbol.clone().unwrap_or_else(|| "-".to_string()),
            fiscal_year: s.fiscal_year,
            period_end: s
                .period_end
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            form_type: s.form_type.clone().unwrap_or_else(|| "-".to_string()),
            total_revenue: format_amount(s.total_revenue),
            net_income: format_amount(s.net_income),
            total_assets: format_amount(s.balance_sheet.total_assets),
            total_liabilities: format_amount(s.balance_sheet.total_liabilities),
            equity: format_amount(s.balance_sheet.total_stockholders_equity),
        })
        .collect()
}

pub fn print_quote_table(quote: &Quote) {
    let mut table = Table::new(build_quote_rows(quote));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_bars_table(bars: &[HistoricalBar]) {
    let mut table = Table::new(build_bar_rows(bars));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_statements_table(statements: &[FinancialStatement]) {
    let mut table = Table::new(build_statement_rows(statements));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_quote_csv(quote: &Quote) -> Result<()> {
    write_csv(build_quote_rows(quote))
}

pub fn print_bars_csv(bars: &[HistoricalBar]) -> Result<()> {
    write_csv(build_bar_rows(bars))
}

pub fn print_statements_csv(statements: &[FinancialStatement]) -> Result<()> {
    write_csv(build_statement_rows(statements))
}

fn write_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Abbreviates large amounts: `$985.4M`, `-$31.2M`, `$12.3K`.
fn format_amount(value: Decimal) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = value.abs();
    let units = [
        (Decimal::from(1_000_000_000), "B"),
        (Decimal::from(1_000_000), "M"),
        (Decimal::from(1_000), "K"),
    ];
    for (i, (unit, suffix)) in units.iter().enumerate() {
        if abs < *unit {
            continue;
        }
        let scaled = round_tenths(abs / *unit);
        // 999,999 rounds to 1000.0K; show it as 1.0M instead.
        if scaled >= Decimal::from(1_000) && i > 0 {
            let (larger, larger_suffix) = &units[i - 1];
            return format!("{}${:.1}{}", sign, round_tenths(abs / *larger), larger_suffix);
        }
        return format!("{}${:.1}{}", sign, scaled, suffix);
    }
    format!("{}${}", sign, abs.normalize())
}

fn round_tenths(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
