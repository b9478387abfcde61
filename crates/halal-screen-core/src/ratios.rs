//! Financial ratio calculations.
//!
//! All ratios are percentages rounded to two decimal places. The rounding is
//! part of the contract: compliance is decided on the rounded value, so
//! `32.999` becomes `33.0` and fails the `< 33` test.

use crate::{CompanyInfo, FinancialFigures};

/// Upper bound (exclusive) for every ratio to count as compliant.
pub const COMPLIANCE_THRESHOLD: f64 = 33.0;

/// Long-term debt over assets net of goodwill and intangibles.
///
/// Returns `None` when any of the three figures is unreported, or when net
/// assets are zero or negative. A company that reports zero debt gets
/// `Some(0.0)`.
pub fn compute_debt_ratio(figures: &FinancialFigures) -> Option<f64> {
    let long_term_debt = figures.long_term_debt?;
    let total_assets = figures.total_assets?;
    let goodwill_and_intangibles = figures.goodwill_and_intangibles?;

    let adjusted_assets = total_assets - goodwill_and_intangibles;
    if adjusted_assets <= 0.0 {
        return None;
    }

    Some(round_percent(long_term_debt / adjusted_assets))
}

/// Cash and investments over market capitalization.
///
/// Unreported cash or investment figures count as zero. Returns `0.0` when
/// market cap is unreported or not positive; that zero means "not evaluable",
/// not "holds no cash".
pub fn compute_liquidity_ratio(info: &CompanyInfo) -> f64 {
    let Some(market_cap) = info.positive_market_cap() else {
        return 0.0;
    };

    let cash_and_investments = info.total_cash.unwrap_or(0.0)
        + info.short_term_investments.unwrap_or(0.0)
        + info.long_term_investments.unwrap_or(0.0);

    round_percent(cash_and_investments / market_cap)
}

/// Net receivables over market capitalization.
///
/// Same market-cap guard as [`compute_liquidity_ratio`].
pub fn compute_receivables_ratio(info: &CompanyInfo) -> f64 {
    let Some(market_cap) = info.positive_market_cap() else {
        return 0.0;
    };

    round_percent(info.net_receivables.unwrap_or(0.0) / market_cap)
}

pub fn is_within_threshold(ratio: f64) -> bool {
    ratio < COMPLIANCE_THRESHOLD
}

fn round_percent(fraction: f64) -> f64 {
    round_to_cents(fraction * 100.0)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
