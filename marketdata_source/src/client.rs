//! HTTP clients for the quote feed and the filings feed.

use std::time::Duration;

use chrono::NaiveDate;
use url::Url;

use crate::{
    query::{HistoricalQuery, Query, QuoteQuery, StatementQuery},
    types::{FinancialStatement, HistoricalBar, Quote},
    Error,
};

/// Request timeout applied to every provider call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Production host for real-time quotes.
pub const QUOTE_BASE_URL: &str = "http://finance.yahoo.com";
/// Production host for daily history.
pub const HISTORY_BASE_URL: &str = "http://ichart.yahoo.com";
/// Production host for core financials.
pub const FILINGS_BASE_URL: &str = "http://edgaronline.api.mashery.com";

const QUOTE_PATH: &str = "/d/quotes.csv";
const HISTORY_PATH: &str = "/table.csv";
const FILINGS_PATH: &str = "/v2/corefinancials/ann.json";

/// Client for real-time quotes and daily history from the CSV quote feed.
///
/// `get_quote` and `get_historical_fixings` are fail-soft: any failure is
/// logged and a zero-valued quote or an empty series is returned, so callers
/// cannot tell an unknown ticker from a network error. The `try_` variants
/// perform the same request and return the error instead.
pub struct PriceClient {
    http: reqwest::Client,
    quote_base_url: String,
    history_base_url: String,
}

impl PriceClient {
    /// Creates a client pointing at the production quote and history hosts.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_urls(QUOTE_BASE_URL, HISTORY_BASE_URL)
    }

    /// Creates a client that sends both quote and history requests to one
    /// base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_base_urls(base_url, base_url)
    }

    /// Creates a client with separate quote and history base URLs.
    pub fn with_base_urls(quote_base_url: &str, history_base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            http: build_http_client()?,
            quote_base_url: quote_base_url.trim_end_matches('/').to_string(),
            history_base_url: history_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the quote request URL for a ticker.
    pub fn quote_url(&self, ticker: &str) -> Result<Url, Error> {
        endpoint(&self.quote_base_url, QUOTE_PATH, &QuoteQuery::new(ticker))
    }

    /// Builds the history request URL for a ticker and date range.
    pub fn historical_url(
        &self,
        ticker: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Url, Error> {
        endpoint(
            &self.history_base_url,
            HISTORY_PATH,
            &HistoricalQuery::new(ticker, from, to),
        )
    }

    /// Fetches the current quote, returning `Quote::default()` on any failure.
    pub async fn get_quote(&self, ticker: &str) -> Quote {
        match self.try_get_quote(ticker).await {
            Ok(quote) => quote,
            Err(e) => {
                tracing::warn!("Quote lookup for {} failed, returning empty quote: {}", ticker, e);
                Quote::default()
            }
        }
    }

    /// Fetches the current quote. The first line of the response is used.
    pub async fn try_get_quote(&self, ticker: &str) -> Result<Quote, Error> {
        let body = fetch_text(&self.http, self.quote_url(ticker)?).await?;
        Quote::parse_csv(&body)?
            .into_iter()
            .next()
            .ok_or(Error::EmptyResponse)
    }

    /// Fetches daily bars between two dates, returning an empty series on any
    /// failure.
    pub async fn get_historical_fixings(
        &self,
        ticker: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<HistoricalBar> {
        match self.try_get_historical_fixings(ticker, from, to).await {
            Ok(bars) => bars,
            Err(e) => {
                tracing::warn!(
                    "History lookup for {} ({} to {}) failed, returning no bars: {}",
                    ticker,
                    from,
                    to,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Fetches daily bars between two dates, in the order the provider sent them.
    pub async fn try_get_historical_fixings(
        &self,
        ticker: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<HistoricalBar>, Error> {
        let body = fetch_text(&self.http, self.historical_url(ticker, from, to)?).await?;
        HistoricalBar::parse_csv(&body)
    }
}

/// Client for annual core financials from the JSON filings feed.
///
/// Unlike [`PriceClient`], every failure is returned to the caller.
pub struct StatementClient {
    http: reqwest::Client,
    app_key: String,
    base_url: String,
}

impl StatementClient {
    /// Creates a client pointing at the production filings host.
    pub fn new(app_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(FILINGS_BASE_URL, app_key)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, app_key: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            http: build_http_client()?,
            app_key: app_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the filings request URL for a ticker.
    pub fn statements_url(&self, ticker: &str) -> Result<Url, Error> {
        endpoint(
            &self.base_url,
            FILINGS_PATH,
            &StatementQuery::new(ticker, &self.app_key),
        )
    }

    /// Fetches every reported statement for a ticker, one per result row.
    pub async fn get_financial_statements(
        &self,
        ticker: &str,
    ) -> Result<Vec<FinancialStatement>, Error> {
        let body = fetch_text(&self.http, self.statements_url(ticker)?).await?;
        FinancialStatement::parse_json(&body)
    }
}

fn build_http_client() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

fn endpoint(base_url: &str, path: &str, query: &impl Query) -> Result<Url, Error> {
    let url = Url::parse(format!("{}{}", base_url, path).as_str()).map_err(|e| {
        tracing::error!("Invalid URL constructed: {}", e);
        Error::InvalidUrl(format!("{}{}: {}", base_url, path, e))
    })?;
    Ok(query.add_to_url(&url))
}

async fn fetch_text(http: &reqwest::Client, url: Url) -> Result<String, Error> {
    tracing::debug!("GET {}", redacted(&url));
    let resp = http.get(url).send().await?;
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        let snippet = truncate_body(&body);
        tracing::error!("Request failed with status {}: {}", status, snippet);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        });
    }
    Ok(body)
}

/// Renders a URL for logging with the application key masked.
fn redacted(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appkey" {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
