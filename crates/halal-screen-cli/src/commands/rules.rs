use halal_screen_core::{
    InputSource, COMPLIANCE_THRESHOLD, DEBT_REASON, EXCLUDED_INDUSTRIES, EXCLUDED_SECTORS,
    EXCLUSION_KEYWORDS, LIQUIDITY_REASON, RECEIVABLES_REASON,
};
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct RulesResponseData {
    threshold: f64,
    ratio_reasons: [&'static str; 3],
    exclusion_keywords: &'static [&'static str],
    excluded_sectors: &'static [&'static str],
    excluded_industries: &'static [&'static str],
}

pub fn run() -> Result<CommandResult, CliError> {
    let data = serde_json::to_value(RulesResponseData {
        threshold: COMPLIANCE_THRESHOLD,
        ratio_reasons: [DEBT_REASON, LIQUIDITY_REASON, RECEIVABLES_REASON],
        exclusion_keywords: EXCLUSION_KEYWORDS,
        excluded_sectors: EXCLUDED_SECTORS,
        excluded_industries: EXCLUDED_INDUSTRIES,
    })?;

    Ok(CommandResult::ok(data, InputSource::Manual))
}
