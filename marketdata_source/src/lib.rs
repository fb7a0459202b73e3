//! Clients for two market-data providers: a CSV quote/history feed and a JSON
//! filings feed, mapped into typed records.
//!
//! Price lookups are fail-soft (`get_*` returns a zero-valued record on any
//! failure, `try_get_*` surfaces the error). Statement lookups are fail-hard.

mod client;
mod convert;
mod errors;
pub mod fields;
mod query;
pub mod types;
pub use self::client::{
    PriceClient, StatementClient, FILINGS_BASE_URL, HISTORY_BASE_URL, QUOTE_BASE_URL,
};
pub use self::errors::Error;
pub use self::query::{HistoricalQuery, Query, QuoteQuery, StatementQuery};
