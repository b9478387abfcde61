use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Balance-sheet figures taken from the most recent reporting period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialFigures {
    #[serde(alias = "longTermDebt", alias = "Long_Term_Debt")]
    pub long_term_debt: Option<f64>,
    #[serde(alias = "totalAssets", alias = "Total_Assets")]
    pub total_assets: Option<f64>,
    #[serde(alias = "goodwillAndIntangibles", alias = "Goodwill_And_Intangibles")]
    pub goodwill_and_intangibles: Option<f64>,
}

impl FinancialFigures {
    pub fn new(
        long_term_debt: Option<f64>,
        total_assets: Option<f64>,
        goodwill_and_intangibles: Option<f64>,
    ) -> Self {
        Self {
            long_term_debt,
            total_assets,
            goodwill_and_intangibles,
        }
    }

    /// Named numeric fields, in declaration order.
    pub fn numeric_fields(&self) -> [(&'static str, Option<f64>); 3] {
        [
            ("long_term_debt", self.long_term_debt),
            ("total_assets", self.total_assets),
            ("goodwill_and_intangibles", self.goodwill_and_intangibles),
        ]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_finite_fields(&self.numeric_fields())
    }
}

/// Market data and profile text for one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    #[serde(alias = "marketCap")]
    pub market_cap: Option<f64>,
    #[serde(alias = "totalCash")]
    pub total_cash: Option<f64>,
    #[serde(alias = "shortTermInvestments")]
    pub short_term_investments: Option<f64>,
    #[serde(alias = "longTermInvestments")]
    pub long_term_investments: Option<f64>,
    #[serde(alias = "netReceivables")]
    pub net_receivables: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    #[serde(alias = "companyName", alias = "longName")]
    pub company_name: Option<String>,
    #[serde(alias = "businessSummary", alias = "longBusinessSummary")]
    pub business_summary: Option<String>,
}

impl CompanyInfo {
    pub fn numeric_fields(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("market_cap", self.market_cap),
            ("total_cash", self.total_cash),
            ("short_term_investments", self.short_term_investments),
            ("long_term_investments", self.long_term_investments),
            ("net_receivables", self.net_receivables),
        ]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_finite_fields(&self.numeric_fields())
    }

    /// Market capitalization usable as a ratio denominator.
    pub fn positive_market_cap(&self) -> Option<f64> {
        self.market_cap.filter(|cap| *cap > 0.0)
    }
}

/// Outcome of one compliance evaluation.
///
/// Built fresh for each evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub debt_ratio: Option<f64>,
    pub liquidity_ratio: f64,
    pub receivables_ratio: f64,
    pub is_debt_compliant: bool,
    pub is_liquidity_compliant: bool,
    pub is_receivables_compliant: bool,
    pub is_business_compliant: bool,
    pub non_compliant_reasons: Vec<String>,
    pub is_fully_compliant: bool,
}

fn validate_finite_fields(fields: &[(&'static str, Option<f64>)]) -> Result<(), ValidationError> {
    for &(field, value) in fields {
        if value.is_some_and(|value| !value.is_finite()) {
            return Err(ValidationError::NonFiniteValue { field });
        }
    }
    Ok(())
}
