//! Aggregate compliance evaluation.

use tracing::{debug, warn};

use crate::business::screen_business;
use crate::ratios::{
    compute_debt_ratio, compute_liquidity_ratio, compute_receivables_ratio, is_within_threshold,
};
use crate::{CompanyInfo, ComplianceError, ComplianceResult, FinancialFigures};

pub const DEBT_REASON: &str = "Debt ratio >= 33% or data missing";
pub const LIQUIDITY_REASON: &str = "Liquidity ratio >= 33%";
pub const RECEIVABLES_REASON: &str = "Receivables ratio >= 33%";

/// Evaluates `figures` and `info`, collapsing any failure into `None`.
///
/// `None` means compliance could not be determined. It must not be read as
/// compliant or as non-compliant.
pub fn evaluate_compliance(
    figures: &FinancialFigures,
    info: &CompanyInfo,
) -> Option<ComplianceResult> {
    match ComplianceEvaluator::evaluate(figures, info) {
        Ok(result) => Some(result),
        Err(error) => {
            warn!(%error, "compliance evaluation indeterminate");
            None
        }
    }
}

/// Combines the ratio checks and the business screen into one verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceEvaluator;

impl ComplianceEvaluator {
    /// Runs the full screen.
    ///
    /// Liquidity and receivables are only checked when market cap is positive.
    /// Without it both ratios stay at `0.0` and count as compliant, while a
    /// missing debt ratio fails the whole evaluation.
    pub fn evaluate(
        figures: &FinancialFigures,
        info: &CompanyInfo,
    ) -> Result<ComplianceResult, ComplianceError> {
        ensure_finite_inputs(figures, info)?;

        let debt_ratio = compute_debt_ratio(figures)
            .map(|ratio| ensure_finite("debt_ratio", ratio))
            .transpose()?;
        let Some(debt_value) = debt_ratio else {
            return Err(ComplianceError::DebtRatioUnavailable);
        };
        let is_debt_compliant = is_within_threshold(debt_value);

        let (liquidity_ratio, is_liquidity_compliant) = if info.positive_market_cap().is_some() {
            let ratio = ensure_finite("liquidity_ratio", compute_liquidity_ratio(info))?;
            (ratio, is_within_threshold(ratio))
        } else {
            (0.0, true)
        };

        let (receivables_ratio, is_receivables_compliant) =
            if info.positive_market_cap().is_some() {
                let ratio = ensure_finite("receivables_ratio", compute_receivables_ratio(info))?;
                (ratio, is_within_threshold(ratio))
            } else {
                (0.0, true)
            };

        let business = screen_business(info);
        let is_business_compliant = business.compliant;

        let mut non_compliant_reasons = Vec::new();
        if !is_debt_compliant {
            non_compliant_reasons.push(DEBT_REASON.to_owned());
        }
        if !is_liquidity_compliant {
            non_compliant_reasons.push(LIQUIDITY_REASON.to_owned());
        }
        if !is_receivables_compliant {
            non_compliant_reasons.push(RECEIVABLES_REASON.to_owned());
        }
        if !is_business_compliant {
            non_compliant_reasons.extend(business.reasons);
        }

        let is_fully_compliant = is_debt_compliant
            && is_liquidity_compliant
            && is_receivables_compliant
            && is_business_compliant;

        debug!(
            debt_ratio = debt_value,
            liquidity_ratio,
            receivables_ratio,
            is_fully_compliant,
            reasons = non_compliant_reasons.len(),
            "compliance evaluated"
        );

        Ok(ComplianceResult {
            debt_ratio,
            liquidity_ratio,
            receivables_ratio,
            is_debt_compliant,
            is_liquidity_compliant,
            is_receivables_compliant,
            is_business_compliant,
            non_compliant_reasons,
            is_fully_compliant,
        })
    }
}

fn ensure_finite_inputs(
    figures: &FinancialFigures,
    info: &CompanyInfo,
) -> Result<(), ComplianceError> {
    figures
        .numeric_fields()
        .into_iter()
        .chain(info.numeric_fields())
        .try_for_each(|(field, value)| match value {
            Some(value) => ensure_finite(field, value).map(|_| ()),
            None => Ok(()),
        })
}

fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ComplianceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComplianceError::ComputationFault { field })
    }
}
