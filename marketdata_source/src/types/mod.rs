mod price;
pub use self::price::{HistoricalBar, Quote};

mod statement;
pub use self::statement::{BalanceSheet, CashFlowStatement, FinancialStatement, IncomeStatement};

mod filings;
pub use self::filings::{FieldEntry, FilingsResponse, FilingsResult, FilingsRow, NULL_TOKEN};
