use chrono::{Datelike, NaiveDate};
use url::Url;

use super::Query;

/// Daily history request for a ticker over an inclusive date range.
///
/// The provider splits each bound into month/day/year parameters and expects
/// the month zero-indexed (January is `0`).
#[derive(Clone, Debug)]
pub struct HistoricalQuery {
    pub ticker: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl HistoricalQuery {
    pub fn new(ticker: &str, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            ticker: ticker.to_string(),
            from,
            to,
        }
    }
}

impl Query for HistoricalQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("s", &self.ticker)
            .append_pair("a", &self.from.month0().to_string())
            .append_pair("b", &self.from.day().to_string())
            .append_pair("c", &self.from.year().to_string())
            .append_pair("d", &self.to.month0().to_string())
            .append_pair("e", &self.to.day().to_string())
            .append_pair("f", &self.to.year().to_string())
            .append_pair("g", "d")
            .append_pair("ignore", ".csv");
        url
    }
}
