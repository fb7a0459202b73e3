//! Financial statement records built from the filings provider's field lists.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::filings::{FilingsResponse, FilingsRow};
use crate::{fields, Error};

/// One filed statement for one entity and one reporting period.
///
/// Numeric fields default to zero, flags to `false`, text and dates to `None`.
/// The balance sheet, income statement and cash flow sub-records are always
/// present, even when the provider sent none of their fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatement {
    pub balance_sheet: BalanceSheet,
    pub income_statement: IncomeStatement,
    pub cash_flow_statement: CashFlowStatement,

    pub cik: Option<String>,
    pub company_name: Option<String>,
    pub entity_id: Option<String>,
    pub primary_exchange: Option<String>,
    pub primary_symbol: Option<String>,
    pub sic_code: Option<String>,
    pub sic_description: Option<String>,
    pub usd_conversion_rate: Decimal,
    pub restated: bool,
    pub received_date: Option<NaiveDate>,
    pub preliminary: bool,
    pub period_length_code: Option<String>,
    pub period_length: Decimal,
    pub period_end: Option<NaiveDate>,
    pub original: bool,
    pub form_type: Option<String>,
    pub fiscal_year: i32,
    pub fiscal_quarter: i32,
    pub dcn: Option<String>,
    pub currency_code: Option<String>,
    pub cross_calculated: bool,
    pub audited: bool,
    pub amended: bool,

    pub change_in_current_assets: Decimal,
    pub change_in_current_liabilities: Decimal,
    pub change_in_inventories: Decimal,
    pub dividends_paid: Decimal,
    pub effect_of_exchange_rate_on_cash: Decimal,
    pub capital_expenditures: Decimal,
    pub cash_from_financing_activities: Decimal,
    pub cash_from_investing_activities: Decimal,
    pub cash_from_operating_activities: Decimal,
    pub cf_depreciation_amortization: Decimal,
    pub change_in_accounts_receivable: Decimal,
    pub investment_changes_net: Decimal,
    pub net_change_in_cash: Decimal,
    pub total_adjustments: Decimal,
    pub ebit: Decimal,
    pub cost_of_revenue: Decimal,
    pub discontinued_operations: Decimal,
    pub equity_earnings: Decimal,
    pub accounting_change: Decimal,
    pub extraordinary_items: Decimal,
    pub gross_profit: Decimal,
    pub income_before_taxes: Decimal,
    pub interest_expense: Decimal,
    pub net_income: Decimal,
    pub net_income_applicable_to_common: Decimal,
    pub research_development_expense: Decimal,
    pub total_revenue: Decimal,
    pub selling_general_administrative_expenses: Decimal,
    pub common_stock: Decimal,
    pub deferred_charges: Decimal,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub cash_and_cash_equivalents: Decimal,
    pub cash_cash_equivalents_and_short_term_investments: Decimal,
    pub goodwill: Decimal,
    pub intangible_assets: Decimal,
    pub inventories_net: Decimal,
    pub other_assets: Decimal,
    pub other_current_assets: Decimal,
    pub other_current_liabilities: Decimal,
    pub other_equity: Decimal,
    pub other_liabilities: Decimal,
    pub preferred_stock: Decimal,
    pub property_plant_equipment_net: Decimal,
    pub retained_earnings: Decimal,
    pub total_assets: Decimal,
    pub total_current_assets: Decimal,
    pub total_current_liabilities: Decimal,
    pub total_liabilities: Decimal,
    pub total_long_term_debt: Decimal,
    pub total_receivables_net: Decimal,
    pub total_short_term_debt: Decimal,
    pub total_stockholders_equity: Decimal,
    pub treasury_stock: Decimal,
}

/// Only minority interest is mapped from the provider today.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    pub minority_interest: Decimal,
}

/// Placeholder; no provider fields map here yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowStatement {}

impl FinancialStatement {
    /// Builds a statement from one result row.
    ///
    /// Fields missing from the mapping table are ignored, as are absent and
    /// `"null"` values. A mapped value that fails to convert is an error.
    pub fn from_row(row: &FilingsRow) -> Result<FinancialStatement, Error> {
        let mut statement = FinancialStatement::default();
        for entry in &row.values {
            let Some(mapping) = fields::lookup(&entry.field) else {
                continue;
            };
            if let Some(value) = entry.text() {
                mapping.apply(&mut statement, &value)?;
            }
        }
        Ok(statement)
    }

    /// Parses a full filings response body into one statement per row.
    pub fn parse_json(body: &str) -> Result<Vec<FinancialStatement>, Error> {
        FilingsResponse::parse(body)?
            .into_rows()?
            .iter()
            .map(FinancialStatement::from_row)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_assets_maps_to_balance_sheet() {
        let body = r#"{"result": {"rows": [{"values": [
            {"field": "totalassets", "value": "12345.67"},
            {"field": "unknownfield", "value": "x"}
        ]}]}}"#;
        let statements = FinancialStatement::parse_json(body).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].balance_sheet.total_assets, dec!(12345.67));

        let mut expected = FinancialStatement::default();
        expected.balance_sheet.total_assets = dec!(12345.67);
        assert_eq!(statements[0], expected);
    }

    #[test]
    fn null_token_leaves_default() {
        let body = r#"{"result": {"rows": [{"values": [
            {"field": "netincome", "value": "null"},
            {"field": "fiscalyear", "value": "null"},
            {"field": "receiveddate", "value": null},
            {"field": "audited", "value": "null"}
        ]}]}}"#;
        let statements = FinancialStatement::parse_json(body).unwrap();
        assert_eq!(statements[0], FinancialStatement::default());
    }

    #[test]
    fn empty_row_still_has_sub_records() {
        let body = r#"{"result": {"rows": [{"values": []}]}}"#;
        let statements = FinancialStatement::parse_json(body).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].balance_sheet, BalanceSheet::default());
        assert_eq!(statements[0].income_statement, IncomeStatement::default());
        assert_eq!(statements[0].cash_flow_statement, CashFlowStatement::default());
    }

    #[test]
    fn rows_keep_response_order() {
        let body = r#"{"result": {"rows": [
            {"values": [{"field": "fiscalyear", "value": "2015"}]},
            {"values": [{"field": "fiscalyear", "value": "2014"}]},
            {"values": [{"field": "fiscalyear", "value": "2013"}]}
        ]}}"#;
        let years: Vec<i32> = FinancialStatement::parse_json(body)
            .unwrap()
            .iter()
            .map(|s| s.fiscal_year)
            .collect();
        assert_eq!(years, vec![2015, 2014, 2013]);
    }

    #[test]
    fn field_names_are_case_sensitive() {
        let body = r#"{"result": {"rows": [{"values": [
            {"field": "TotalAssets", "value": "1"}
        ]}]}}"#;
        let statements = FinancialStatement::parse_json(body).unwrap();
        assert_eq!(statements[0].balance_sheet.total_assets, Decimal::ZERO);
    }

    #[test]
    fn grouped_decimal_is_accepted() {
        let body = r#"{"result": {"rows": [{"values": [
            {"field": "ebit", "value": "1,234.00"}
        ]}]}}"#;
        let statements = FinancialStatement::parse_json(body).unwrap();
        assert_eq!(statements[0].ebit, dec!(1234.00));
    }

    #[test]
    fn bad_decimal_fails_the_response() {
        let body = r#"{"result": {"rows": [{"values": [
            {"field": "ebit", "value": "N/A"}
        ]}]}}"#;
        let err = FinancialStatement::parse_json(body).unwrap_err();
        match err {
            Error::InvalidField { field, value, .. } => {
                assert_eq!(field, "ebit");
                assert_eq!(value, "N/A");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn numeric_json_values_are_accepted() {
        let body = r#"{"result": {"rows": [{"values": [
            {"field": "totalrevenue", "value": 93580.0},
            {"field": "fiscalquarter", "value": 4},
            {"field": "restated", "value": false}
        ]}]}}"#;
        let statements = FinancialStatement::parse_json(body).unwrap();
        assert_eq!(statements[0].total_revenue, dec!(93580));
        assert_eq!(statements[0].fiscal_quarter, 4);
        assert!(!statements[0].restated);
    }

    #[test]
    fn numeric_json_values_keep_full_precision() {
        let body = r#"{"result": {"rows": [{"values": [
            {"field": "totalrevenue", "value": 12345678901234.567},
            {"field": "ebit", "value": 0.1234567890123456789}
        ]}]}}"#;
        let statements = FinancialStatement::parse_json(body).unwrap();
        assert_eq!(statements[0].total_revenue, dec!(12345678901234.567));
        assert_eq!(statements[0].ebit, dec!(0.1234567890123456789));
    }

    #[test]
    fn missing_rows_is_malformed() {
        assert!(matches!(
            FinancialStatement::parse_json(r#"{"result": {}}"#),
            Err(Error::MalformedResponse(_))
        ));
    }
}
