//! Runtime settings read from the environment (and a `.env` file, if present).

use anyhow::{Context, Result};
use marketdata_source::{
    PriceClient, StatementClient, FILINGS_BASE_URL, HISTORY_BASE_URL, QUOTE_BASE_URL,
};

pub const APP_KEY_VAR: &str = "MARKETDATA_EDGAR_APP_KEY";
pub const QUOTE_URL_VAR: &str = "MARKETDATA_QUOTE_URL";
pub const HISTORY_URL_VAR: &str = "MARKETDATA_HISTORY_URL";
pub const EDGAR_URL_VAR: &str = "MARKETDATA_EDGAR_URL";

#[derive(Debug, Default)]
pub struct Settings {
    pub edgar_app_key: Option<String>,
    pub quote_url: Option<String>,
    pub history_url: Option<String>,
    pub edgar_url: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        // A missing .env file is fine; real environment variables still apply.
        let _ = dotenvy::dotenv();
        Self {
            edgar_app_key: env_string(APP_KEY_VAR),
            quote_url: env_string(QUOTE_URL_VAR),
            history_url: env_string(HISTORY_URL_VAR),
            edgar_url: env_string(EDGAR_URL_VAR),
        }
    }

    pub fn price_client(&self) -> Result<PriceClient> {
        let quote = self.quote_url.as_deref().unwrap_or(QUOTE_BASE_URL);
        let history = self.history_url.as_deref().unwrap_or(HISTORY_BASE_URL);
        Ok(PriceClient::with_base_urls(quote, history)?)
    }

    /// The filings provider needs an application key; fails without one.
    pub fn statement_client(&self) -> Result<StatementClient> {
        let app_key = self
            .edgar_app_key
            .as_deref()
            .with_context(|| format!("{} is not set", APP_KEY_VAR))?;
        let base = self.edgar_url.as_deref().unwrap_or(FILINGS_BASE_URL);
        Ok(StatementClient::with_base_url(base, app_key)?)
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
