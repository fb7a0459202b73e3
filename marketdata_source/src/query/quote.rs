use url::Url;

use super::Query;

/// Field abbreviations requested from the quote feed: symbol, name, bid, ask,
/// open, previous close, last trade price.
pub const QUOTE_FIELDS: &str = "snbaopl1";

/// Real-time quote request for a single ticker.
#[derive(Clone, Debug)]
pub struct QuoteQuery {
    pub ticker: String,
}

impl QuoteQuery {
    pub fn new(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
        }
    }
}

impl Query for QuoteQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("s", &self.ticker)
            .append_pair("f", QUOTE_FIELDS);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_query_params() {
        let base = Url::parse("http://finance.yahoo.com/d/quotes.csv").unwrap();
        let url = QuoteQuery::new("MSFT").add_to_url(&base);
        assert_eq!(
            url.as_str(),
            "http://finance.yahoo.com/d/quotes.csv?s=MSFT&f=snbaopl1"
        );
    }
}
