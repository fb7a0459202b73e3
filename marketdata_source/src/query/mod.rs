mod common;
pub use self::common::Query;

mod quote;
pub use self::quote::QuoteQuery;

mod historical;
pub use self::historical::HistoricalQuery;

mod statement;
pub use self::statement::StatementQuery;
