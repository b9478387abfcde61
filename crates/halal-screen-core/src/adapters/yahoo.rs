//! Yahoo `quoteSummary` payload mapping.
//!
//! Fetching is left to the caller. This module only turns a response body
//! requested with the `price`, `assetProfile`, `summaryDetail`,
//! `financialData` and `balanceSheetHistory` modules into a [`Snapshot`].

use serde::Deserialize;
use tracing::debug;

use crate::{CompanyInfo, CoreError, FinancialFigures, Snapshot, Ticker};

/// Maps a `quoteSummary` response body into a snapshot.
///
/// `fallback_symbol` is used when the payload carries no `price.symbol`.
pub fn parse_quote_summary(
    body: &str,
    fallback_symbol: Option<Ticker>,
) -> Result<Snapshot, CoreError> {
    let response: YahooQuoteSummaryResponse = serde_json::from_str(body)
        .map_err(|e| CoreError::payload(format!("failed to parse yahoo quoteSummary: {e}")))?;

    if let Some(error) = response.quote_summary.error {
        let message = error.description();
        if !message.is_empty() {
            return Err(CoreError::payload(format!(
                "yahoo quoteSummary API error: {message}"
            )));
        }
    }

    let result = response
        .quote_summary
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::payload("yahoo quoteSummary returned no result"))?;

    let symbol = match result.price.as_ref().and_then(|price| price.symbol.as_deref()) {
        Some(raw) => Some(Ticker::parse(raw)?),
        None => fallback_symbol,
    };

    let snapshot = Snapshot::new(symbol, result.figures(), result.info());
    snapshot.validate()?;

    debug!(
        symbol = snapshot.symbol.as_ref().map(Ticker::as_str),
        has_balance_sheet = result.latest_balance_sheet().is_some(),
        "mapped yahoo quoteSummary"
    );

    Ok(snapshot)
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: YahooQuoteSummaryData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryData {
    #[serde(default)]
    result: Option<Vec<YahooQuoteSummaryResult>>,
    #[serde(default)]
    error: Option<YahooApiError>,
}

/// Yahoo reports errors either as a bare string or as `{code, description}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum YahooApiError {
    Message(String),
    Detailed {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl YahooApiError {
    fn description(&self) -> String {
        match self {
            Self::Message(message) => message.trim().to_owned(),
            Self::Detailed { code, description } => match (code, description) {
                (Some(code), Some(description)) => format!("{code}: {description}"),
                (Some(text), None) | (None, Some(text)) => text.clone(),
                (None, None) => String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct YahooQuoteSummaryResult {
    price: Option<YahooPrice>,
    #[serde(rename = "assetProfile")]
    asset_profile: Option<YahooAssetProfile>,
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<YahooSummaryDetail>,
    #[serde(rename = "financialData")]
    financial_data: Option<YahooFinancialData>,
    #[serde(rename = "balanceSheetHistory")]
    balance_sheet_history: Option<YahooBalanceSheetHistory>,
}

impl YahooQuoteSummaryResult {
    fn latest_balance_sheet(&self) -> Option<&YahooBalanceSheet> {
        self.balance_sheet_history
            .as_ref()
            .and_then(|history| history.balance_sheet_statements.first())
    }

    fn figures(&self) -> FinancialFigures {
        let Some(sheet) = self.latest_balance_sheet() else {
            return FinancialFigures::default();
        };

        let goodwill = raw(&sheet.good_will);
        let intangibles = raw(&sheet.intangible_assets);
        let goodwill_and_intangibles = match (goodwill, intangibles) {
            (None, None) => None,
            (goodwill, intangibles) => Some(goodwill.unwrap_or(0.0) + intangibles.unwrap_or(0.0)),
        };

        FinancialFigures::new(
            raw(&sheet.long_term_debt),
            raw(&sheet.total_assets),
            goodwill_and_intangibles,
        )
    }

    fn info(&self) -> CompanyInfo {
        let sheet = self.latest_balance_sheet();
        let profile = self.asset_profile.as_ref();

        let company_name = self.price.as_ref().and_then(|price| {
            non_blank(&price.long_name).or_else(|| non_blank(&price.short_name))
        });

        let market_cap = self
            .price
            .as_ref()
            .and_then(|price| raw(&price.market_cap))
            .or_else(|| {
                self.summary_detail
                    .as_ref()
                    .and_then(|detail| raw(&detail.market_cap))
            });

        let total_cash = self
            .financial_data
            .as_ref()
            .and_then(|data| raw(&data.total_cash))
            .or_else(|| sheet.and_then(|sheet| raw(&sheet.cash)));

        CompanyInfo {
            market_cap,
            total_cash,
            short_term_investments: sheet.and_then(|sheet| raw(&sheet.short_term_investments)),
            long_term_investments: sheet.and_then(|sheet| raw(&sheet.long_term_investments)),
            net_receivables: sheet.and_then(|sheet| raw(&sheet.net_receivables)),
            sector: profile.and_then(|profile| non_blank(&profile.sector)),
            industry: profile.and_then(|profile| non_blank(&profile.industry)),
            company_name,
            business_summary: profile.and_then(|profile| non_blank(&profile.long_business_summary)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct YahooPrice {
    symbol: Option<String>,
    #[serde(rename = "longName")]
    long_name: Option<String>,
    #[serde(rename = "shortName")]
    short_name: Option<String>,
    #[serde(rename = "marketCap")]
    market_cap: Option<YahooRawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct YahooAssetProfile {
    sector: Option<String>,
    industry: Option<String>,
    #[serde(rename = "longBusinessSummary")]
    long_business_summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct YahooSummaryDetail {
    #[serde(rename = "marketCap")]
    market_cap: Option<YahooRawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct YahooFinancialData {
    #[serde(rename = "totalCash")]
    total_cash: Option<YahooRawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct YahooBalanceSheetHistory {
    #[serde(rename = "balanceSheetStatements")]
    balance_sheet_statements: Vec<YahooBalanceSheet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct YahooBalanceSheet {
    cash: Option<YahooRawValue>,
    #[serde(rename = "shortTermInvestments")]
    short_term_investments: Option<YahooRawValue>,
    #[serde(rename = "longTermInvestments")]
    long_term_investments: Option<YahooRawValue>,
    #[serde(rename = "netReceivables")]
    net_receivables: Option<YahooRawValue>,
    #[serde(rename = "totalAssets")]
    total_assets: Option<YahooRawValue>,
    #[serde(rename = "longTermDebt")]
    long_term_debt: Option<YahooRawValue>,
    #[serde(rename = "goodWill")]
    good_will: Option<YahooRawValue>,
    #[serde(rename = "intangibleAssets")]
    intangible_assets: Option<YahooRawValue>,
}

/// Yahoo wraps numbers as `{"raw": 1.0, "fmt": "1.00"}`. Some payloads,
/// notably ones already flattened by client libraries, carry a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum YahooRawValue {
    Bare(f64),
    Wrapped {
        #[serde(default)]
        raw: Option<f64>,
    },
}

impl YahooRawValue {
    /// Reported zeros are kept; only a missing or NaN value is absent.
    fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Bare(value) => Some(*value),
            Self::Wrapped { raw } => *raw,
        };
        value.filter(|v| !v.is_nan())
    }
}

fn raw(value: &Option<YahooRawValue>) -> Option<f64> {
    value.as_ref().and_then(YahooRawValue::value)
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
