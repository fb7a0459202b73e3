//! Quote and daily bar records parsed from the quote feed's CSV responses.
//!
//! Columns are positional; a header line, when present, is skipped and never
//! used to locate columns.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{convert, Error};

/// Point-in-time price snapshot for one ticker.
///
/// `Quote::default()` is the zero-valued quote returned by fail-soft lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub bid: Decimal,
    pub ask: Decimal,
    pub open: Decimal,
    pub previous_close: Decimal,
    pub last: Decimal,
}

/// One trading day of OHLCV data plus the adjusted close.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalBar {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    pub adj_close: Decimal,
}

impl Quote {
    /// Parses a headerless quote CSV body, one quote per non-empty line.
    pub fn parse_csv(body: &str) -> Result<Vec<Quote>, Error> {
        read_rows(body, false, |row| {
            Ok(Quote {
                symbol: row.text(0)?,
                name: row.text(1)?,
                bid: row.decimal(2)?,
                ask: row.decimal(3)?,
                open: row.decimal(4)?,
                previous_close: row.decimal(5)?,
                last: row.decimal(6)?,
            })
        })
    }
}

impl HistoricalBar {
    /// Parses a history CSV body. The first line is treated as a header and
    /// discarded; every other non-empty line becomes one bar, in input order.
    pub fn parse_csv(body: &str) -> Result<Vec<HistoricalBar>, Error> {
        read_rows(body, true, |row| {
            Ok(HistoricalBar {
                date: row.date(0)?,
                open: row.decimal(1)?,
                high: row.decimal(2)?,
                low: row.decimal(3)?,
                close: row.decimal(4)?,
                volume: row.decimal(5)?,
                adj_close: row.decimal(6)?,
            })
        })
    }
}

fn read_rows<T>(
    body: &str,
    skip_header: bool,
    mut map: impl FnMut(&Row<'_>) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(skip_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut out = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::MalformedCsv {
            line: e.position().map(|p| p.line() as usize).unwrap_or(0),
            reason: e.to_string(),
        })?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);
        out.push(map(&Row { record: &record, line })?);
    }
    Ok(out)
}

struct Row<'a> {
    record: &'a StringRecord,
    line: usize,
}

impl Row<'_> {
    fn column(&self, index: usize) -> Result<&str, Error> {
        self.record.get(index).ok_or_else(|| Error::MalformedCsv {
            line: self.line,
            reason: format!(
                "expected at least {} columns, found {}",
                index + 1,
                self.record.len()
            ),
        })
    }

    fn text(&self, index: usize) -> Result<String, Error> {
        self.column(index).map(str::to_string)
    }

    fn decimal(&self, index: usize) -> Result<Decimal, Error> {
        let raw = self.column(index)?;
        convert::parse_decimal(raw).map_err(|e| self.invalid(index, raw, e))
    }

    fn date(&self, index: usize) -> Result<NaiveDate, Error> {
        let raw = self.column(index)?;
        convert::parse_date(raw).map_err(|e| self.invalid(index, raw, e))
    }

    fn invalid(&self, index: usize, raw: &str, reason: String) -> Error {
        Error::MalformedCsv {
            line: self.line,
            reason: format!("column {} ({:?}): {}", index, raw, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quote_columns_are_positional() {
        let quotes =
            Quote::parse_csv("\"MSFT\",\"Microsoft Corporation\",52.10,52.12,51.90,51.80,52.11\n")
                .unwrap();
        assert_eq!(quotes.len(), 1);
        let q = &quotes[0];
        assert_eq!(q.symbol, "MSFT");
        assert_eq!(q.name, "Microsoft Corporation");
        assert_eq!(q.bid, dec!(52.10));
        assert_eq!(q.ask, dec!(52.12));
        assert_eq!(q.open, dec!(51.90));
        assert_eq!(q.previous_close, dec!(51.80));
        assert_eq!(q.last, dec!(52.11));
    }

    #[test]
    fn quote_with_missing_price_is_malformed() {
        let err = Quote::parse_csv("\"MSFT\",\"Microsoft Corporation\",N/A,52.12,51.90,51.80,52.11")
            .unwrap_err();
        assert!(matches!(err, Error::MalformedCsv { line: 1, .. }));
    }

    #[test]
    fn quote_with_too_few_columns_is_malformed() {
        let err = Quote::parse_csv("MSFT,Microsoft").unwrap_err();
        assert!(err.to_string().contains("expected at least 3 columns"));
    }

    #[test]
    fn history_skips_header_and_blank_lines() {
        let body = "Date,Open,High,Low,Close,Volume,Adj Close\r\n\
                    2016-03-23,10.20,10.40,10.00,10.30,900000,10.25\r\n\
                    \r\n\
                    2016-03-22,10.00,10.50,9.90,10.20,1000000,10.15\r\n";
        let bars = HistoricalBar::parse_csv(body).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2016, 3, 23).unwrap());
        assert_eq!(bars[1].date, NaiveDate::from_ymd_opt(2016, 3, 22).unwrap());
        assert_eq!(bars[1].close, dec!(10.20));
        assert_eq!(bars[1].volume, dec!(1000000));
        assert_eq!(bars[1].adj_close, dec!(10.15));
    }

    #[test]
    fn history_with_only_header_is_empty() {
        let bars = HistoricalBar::parse_csv("Date,Open,High,Low,Close,Volume,Adj Close\n").unwrap();
        assert!(bars.is_empty());
    }

    #[test]
    fn history_with_bad_date_reports_line() {
        let body = "Date,Open,High,Low,Close,Volume,Adj Close\n\
                    2016-03-22,10.00,10.50,9.90,10.20,1000000,10.15\n\
                    not-a-date,10.00,10.50,9.90,10.20,1000000,10.15\n";
        let err = HistoricalBar::parse_csv(body).unwrap_err();
        assert!(matches!(err, Error::MalformedCsv { line: 3, .. }));
    }
}
