use halal_screen_core::{
    compute_debt_ratio, compute_liquidity_ratio, compute_receivables_ratio, CompanyInfo,
    FinancialFigures, InputSource, COMPLIANCE_THRESHOLD,
};
use serde::Serialize;

use crate::cli::RatiosArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct RatiosResponseData {
    threshold: f64,
    debt_ratio: Option<f64>,
    liquidity_ratio: f64,
    receivables_ratio: f64,
    market_cap_available: bool,
}

pub fn run(args: &RatiosArgs) -> Result<CommandResult, CliError> {
    let figures = FinancialFigures::new(args.long_term_debt, args.total_assets, args.goodwill);
    let info = CompanyInfo {
        market_cap: args.market_cap,
        total_cash: args.total_cash,
        short_term_investments: args.short_term_investments,
        long_term_investments: args.long_term_investments,
        net_receivables: args.net_receivables,
        ..CompanyInfo::default()
    };

    figures.validate()?;
    info.validate()?;

    let market_cap_available = info.positive_market_cap().is_some();
    let data = serde_json::to_value(RatiosResponseData {
        threshold: COMPLIANCE_THRESHOLD,
        debt_ratio: compute_debt_ratio(&figures),
        liquidity_ratio: compute_liquidity_ratio(&info),
        receivables_ratio: compute_receivables_ratio(&info),
        market_cap_available,
    })?;

    let mut result = CommandResult::ok(data, InputSource::Manual);
    if !market_cap_available {
        result = result.with_warning(
            "market cap missing or not positive; liquidity and receivables ratios default to 0",
        );
    }

    Ok(result)
}
