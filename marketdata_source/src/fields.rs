//! Static table binding the filings provider's field names to typed
//! assignments on [`FinancialStatement`].
//!
//! Names are matched case-sensitively and spelled exactly as the provider
//! sends them. Fields that are not listed here are ignored.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{convert, types::FinancialStatement, Error};

/// Which record an entry writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Statement,
    BalanceSheet,
    IncomeStatement,
}

/// How an entry's text value is converted before assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Decimal,
    Flag,
    Date,
    Integer,
}

/// Typed assignment applied once the value has been converted.
#[derive(Clone, Copy)]
pub enum Assign {
    Text(fn(&mut FinancialStatement, String)),
    Decimal(fn(&mut FinancialStatement, Decimal)),
    Flag(fn(&mut FinancialStatement, bool)),
    Date(fn(&mut FinancialStatement, NaiveDate)),
    Integer(fn(&mut FinancialStatement, i32)),
}

impl Assign {
    pub fn kind(&self) -> ValueKind {
        match self {
            Assign::Text(_) => ValueKind::Text,
            Assign::Decimal(_) => ValueKind::Decimal,
            Assign::Flag(_) => ValueKind::Flag,
            Assign::Date(_) => ValueKind::Date,
            Assign::Integer(_) => ValueKind::Integer,
        }
    }
}

/// One row of the mapping table.
pub struct FieldMapping {
    pub name: &'static str,
    pub section: Section,
    pub assign: Assign,
}

impl fmt::Debug for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMapping")
            .field("name", &self.name)
            .field("section", &self.section)
            .field("kind", &self.assign.kind())
            .finish()
    }
}

impl FieldMapping {
    /// Converts `value` according to this entry's kind and assigns it.
    pub fn apply(&self, statement: &mut FinancialStatement, value: &str) -> Result<(), Error> {
        let invalid = |reason: String| Error::InvalidField {
            field: self.name.to_string(),
            value: value.to_string(),
            reason,
        };
        match self.assign {
            Assign::Text(set) => set(statement, value.to_string()),
            Assign::Decimal(set) => {
                set(statement, convert::parse_decimal(value).map_err(invalid)?)
            }
            Assign::Flag(set) => set(statement, convert::parse_flag(value).map_err(invalid)?),
            Assign::Date(set) => set(statement, convert::parse_date(value).map_err(invalid)?),
            Assign::Integer(set) => {
                set(statement, convert::parse_integer(value).map_err(invalid)?)
            }
        }
        Ok(())
    }
}

/// Looks up the table entry for a provider field name.
pub fn lookup(name: &str) -> Option<&'static FieldMapping> {
    FIELD_MAP.iter().find(|m| m.name == name)
}

const fn statement(name: &'static str, assign: Assign) -> FieldMapping {
    FieldMapping {
        name,
        section: Section::Statement,
        assign,
    }
}

const fn balance_sheet(name: &'static str, assign: Assign) -> FieldMapping {
    FieldMapping {
        name,
        section: Section::BalanceSheet,
        assign,
    }
}

const fn income_statement(name: &'static str, assign: Assign) -> FieldMapping {
    FieldMapping {
        name,
        section: Section::IncomeStatement,
        assign,
    }
}

pub static FIELD_MAP: &[FieldMapping] = &[
    // Filing metadata
    statement("cik", Assign::Text(|s, v| s.cik = Some(v))),
    statement("companyname", Assign::Text(|s, v| s.company_name = Some(v))),
    statement("entityid", Assign::Text(|s, v| s.entity_id = Some(v))),
    statement("primaryexchange", Assign::Text(|s, v| s.primary_exchange = Some(v))),
    statement("primarysymbol", Assign::Text(|s, v| s.primary_symbol = Some(v))),
    statement("siccode", Assign::Text(|s, v| s.sic_code = Some(v))),
    statement("sicdescription", Assign::Text(|s, v| s.sic_description = Some(v))),
    statement("usdconversionrate", Assign::Decimal(|s, v| s.usd_conversion_rate = v)),
    statement("restated", Assign::Flag(|s, v| s.restated = v)),
    statement("receiveddate", Assign::Date(|s, v| s.received_date = Some(v))),
    statement("preliminary", Assign::Flag(|s, v| s.preliminary = v)),
    statement("periodlengthcode", Assign::Text(|s, v| s.period_length_code = Some(v))),
    statement("periodlength", Assign::Decimal(|s, v| s.period_length = v)),
    statement("periodenddate", Assign::Date(|s, v| s.period_end = Some(v))),
    statement("original", Assign::Flag(|s, v| s.original = v)),
    statement("formtype", Assign::Text(|s, v| s.form_type = Some(v))),
    statement("fiscalyear", Assign::Integer(|s, v| s.fiscal_year = v)),
    statement("fiscalquarter", Assign::Integer(|s, v| s.fiscal_quarter = v)),
    statement("dcn", Assign::Text(|s, v| s.dcn = Some(v))),
    statement("currencycode", Assign::Text(|s, v| s.currency_code = Some(v))),
    statement("crosscalculated", Assign::Flag(|s, v| s.cross_calculated = v)),
    statement("audited", Assign::Flag(|s, v| s.audited = v)),
    statement("amended", Assign::Flag(|s, v| s.amended = v)),
    // Income statement and cash flow line items
    statement("changeincurrentassets", Assign::Decimal(|s, v| s.change_in_current_assets = v)),
    statement(
        "changeincurrentliabilities",
        Assign::Decimal(|s, v| s.change_in_current_liabilities = v),
    ),
    statement("changeininventories", Assign::Decimal(|s, v| s.change_in_inventories = v)),
    statement("dividendspaid", Assign::Decimal(|s, v| s.dividends_paid = v)),
    statement(
        "effectofexchangerateoncash",
        Assign::Decimal(|s, v| s.effect_of_exchange_rate_on_cash = v),
    ),
    statement("capitalexpenditures", Assign::Decimal(|s, v| s.capital_expenditures = v)),
    statement(
        "cashfromfinancingactivities",
        Assign::Decimal(|s, v| s.cash_from_financing_activities = v),
    ),
    statement(
        "cashfrominvestingactivities",
        Assign::Decimal(|s, v| s.cash_from_investing_activities = v),
    ),
    statement(
        "cashfromoperatingactivities",
        Assign::Decimal(|s, v| s.cash_from_operating_activities = v),
    ),
    statement(
        "cfdepreciationamortization",
        Assign::Decimal(|s, v| s.cf_depreciation_amortization = v),
    ),
    statement(
        "changeinaccountsreceivable",
        Assign::Decimal(|s, v| s.change_in_accounts_receivable = v),
    ),
    statement("investmentchangesnet", Assign::Decimal(|s, v| s.investment_changes_net = v)),
    statement("netchangeincash", Assign::Decimal(|s, v| s.net_change_in_cash = v)),
    statement("totaladjustments", Assign::Decimal(|s, v| s.total_adjustments = v)),
    statement("ebit", Assign::Decimal(|s, v| s.ebit = v)),
    statement("costofrevenue", Assign::Decimal(|s, v| s.cost_of_revenue = v)),
    statement("discontinuedoperations", Assign::Decimal(|s, v| s.discontinued_operations = v)),
    statement("equityearnings", Assign::Decimal(|s, v| s.equity_earnings = v)),
    statement("accountingchange", Assign::Decimal(|s, v| s.accounting_change = v)),
    statement("extraordinaryitems", Assign::Decimal(|s, v| s.extraordinary_items = v)),
    statement("grossprofit", Assign::Decimal(|s, v| s.gross_profit = v)),
    statement("incomebeforetaxes", Assign::Decimal(|s, v| s.income_before_taxes = v)),
    statement("interestexpense", Assign::Decimal(|s, v| s.interest_expense = v)),
    statement("netincome", Assign::Decimal(|s, v| s.net_income = v)),
    statement(
        "netincomeapplicabletocommon",
        Assign::Decimal(|s, v| s.net_income_applicable_to_common = v),
    ),
    statement(
        "researchdevelopmentexpense",
        Assign::Decimal(|s, v| s.research_development_expense = v),
    ),
    statement("totalrevenue", Assign::Decimal(|s, v| s.total_revenue = v)),
    statement(
        "sellinggeneraladministrativeexpenses",
        Assign::Decimal(|s, v| s.selling_general_administrative_expenses = v),
    ),
    statement("commonstock", Assign::Decimal(|s, v| s.common_stock = v)),
    statement("deferredcharges", Assign::Decimal(|s, v| s.deferred_charges = v)),
    // Balance sheet
    balance_sheet(
        "cashandcashequivalents",
        Assign::Decimal(|s, v| s.balance_sheet.cash_and_cash_equivalents = v),
    ),
    balance_sheet(
        "cashcashequivalentsandshortterminvestments",
        Assign::Decimal(|s, v| s.balance_sheet.cash_cash_equivalents_and_short_term_investments = v),
    ),
    balance_sheet("goodwill", Assign::Decimal(|s, v| s.balance_sheet.goodwill = v)),
    balance_sheet(
        "intangibleassets",
        Assign::Decimal(|s, v| s.balance_sheet.intangible_assets = v),
    ),
    balance_sheet("inventoriesnet", Assign::Decimal(|s, v| s.balance_sheet.inventories_net = v)),
    balance_sheet("otherassets", Assign::Decimal(|s, v| s.balance_sheet.other_assets = v)),
    balance_sheet(
        "othercurrentassets",
        Assign::Decimal(|s, v| s.balance_sheet.other_current_assets = v),
    ),
    balance_sheet(
        "othercurrentliabilities",
        Assign::Decimal(|s, v| s.balance_sheet.other_current_liabilities = v),
    ),
    balance_sheet("otherequity", Assign::Decimal(|s, v| s.balance_sheet.other_equity = v)),
    balance_sheet(
        "otherliabilities",
        Assign::Decimal(|s, v| s.balance_sheet.other_liabilities = v),
    ),
    balance_sheet("preferredstock", Assign::Decimal(|s, v| s.balance_sheet.preferred_stock = v)),
    balance_sheet(
        "propertyplantequipmentnet",
        Assign::Decimal(|s, v| s.balance_sheet.property_plant_equipment_net = v),
    ),
    balance_sheet(
        "retainedearnings",
        Assign::Decimal(|s, v| s.balance_sheet.retained_earnings = v),
    ),
    balance_sheet("totalassets", Assign::Decimal(|s, v| s.balance_sheet.total_assets = v)),
    balance_sheet(
        "totalcurrentassets",
        Assign::Decimal(|s, v| s.balance_sheet.total_current_assets = v),
    ),
    balance_sheet(
        "totalcurrentliabilities",
        Assign::Decimal(|s, v| s.balance_sheet.total_current_liabilities = v),
    ),
    balance_sheet(
        "totalliabilities",
        Assign::Decimal(|s, v| s.balance_sheet.total_liabilities = v),
    ),
    balance_sheet(
        "totallongtermdebt",
        Assign::Decimal(|s, v| s.balance_sheet.total_long_term_debt = v),
    ),
    balance_sheet(
        "totalreceivablesnet",
        Assign::Decimal(|s, v| s.balance_sheet.total_receivables_net = v),
    ),
    balance_sheet(
        "totalshorttermdebt",
        Assign::Decimal(|s, v| s.balance_sheet.total_short_term_debt = v),
    ),
    balance_sheet(
        "totalstockholdersequity",
        Assign::Decimal(|s, v| s.balance_sheet.total_stockholders_equity = v),
    ),
    balance_sheet("treasurystock", Assign::Decimal(|s, v| s.balance_sheet.treasury_stock = v)),
    income_statement(
        "minorityinterest",
        Assign::Decimal(|s, v| s.income_statement.minority_interest = v),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BalanceSheet;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn count(section: Section) -> usize {
        FIELD_MAP.iter().filter(|m| m.section == section).count()
    }

    #[test]
    fn table_size_and_sections() {
        assert_eq!(FIELD_MAP.len(), 76);
        assert_eq!(count(Section::Statement), 53);
        assert_eq!(count(Section::BalanceSheet), 22);
        assert_eq!(count(Section::IncomeStatement), 1);
    }

    #[test]
    fn names_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for mapping in FIELD_MAP {
            assert!(seen.insert(mapping.name), "duplicate field {}", mapping.name);
            assert_eq!(mapping.name, mapping.name.to_lowercase());
        }
    }

    #[test]
    fn value_kinds() {
        let kind = |name: &str| lookup(name).unwrap().assign.kind();
        assert_eq!(kind("cik"), ValueKind::Text);
        assert_eq!(kind("usdconversionrate"), ValueKind::Decimal);
        assert_eq!(kind("restated"), ValueKind::Flag);
        assert_eq!(kind("periodenddate"), ValueKind::Date);
        assert_eq!(kind("fiscalyear"), ValueKind::Integer);
        let decimals = FIELD_MAP
            .iter()
            .filter(|m| m.assign.kind() == ValueKind::Decimal)
            .count();
        assert_eq!(decimals, 55);
    }

    #[test]
    fn minority_interest_targets_income_statement() {
        let mapping = lookup("minorityinterest").unwrap();
        assert_eq!(mapping.section, Section::IncomeStatement);

        let mut statement = FinancialStatement::default();
        mapping.apply(&mut statement, "-12.5").unwrap();
        assert_eq!(statement.income_statement.minority_interest, dec!(-12.5));
        assert_eq!(statement.balance_sheet, BalanceSheet::default());
    }

    #[test]
    fn apply_each_kind() {
        let mut statement = FinancialStatement::default();
        lookup("companyname").unwrap().apply(&mut statement, "CDI CORP").unwrap();
        lookup("amended").unwrap().apply(&mut statement, "True").unwrap();
        lookup("periodenddate").unwrap().apply(&mut statement, "12/31/2015").unwrap();
        lookup("fiscalquarter").unwrap().apply(&mut statement, "4").unwrap();
        lookup("capitalexpenditures").unwrap().apply(&mut statement, "-8.2").unwrap();

        assert_eq!(statement.company_name.as_deref(), Some("CDI CORP"));
        assert!(statement.amended);
        assert_eq!(statement.period_end, NaiveDate::from_ymd_opt(2015, 12, 31));
        assert_eq!(statement.fiscal_quarter, 4);
        assert_eq!(statement.capital_expenditures, dec!(-8.2));
    }

    #[test]
    fn conversion_failure_names_the_field() {
        let mut statement = FinancialStatement::default();
        let err = lookup("fiscalyear")
            .unwrap()
            .apply(&mut statement, "FY2015")
            .unwrap_err();
        assert!(err.to_string().contains("fiscalyear"));
        assert_eq!(statement.fiscal_year, 0);
    }

    #[test]
    fn unknown_field_has_no_entry() {
        assert!(lookup("unknownfield").is_none());
        assert!(lookup("TotalAssets").is_none());
    }
}
