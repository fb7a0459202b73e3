use url::Url;

use super::Query;

/// Annual core-financials request, authenticated by an application key.
#[derive(Clone)]
pub struct StatementQuery {
    pub ticker: String,
    pub app_key: String,
}

impl StatementQuery {
    pub fn new(ticker: &str, app_key: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            app_key: app_key.to_string(),
        }
    }
}

impl Query for StatementQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("primarysymbols", &self.ticker)
            .append_pair("appkey", &self.app_key);
        url
    }
}
