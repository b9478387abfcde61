//! Behavior-driven tests for the compliance screen
//!
//! These tests verify WHAT verdict a user gets for a given company, focusing
//! on observable results rather than on how ratios are combined internally.

use halal_screen_core::{
    compute_debt_ratio, compute_liquidity_ratio, compute_receivables_ratio, evaluate_compliance,
    CompanyInfo, ComplianceError, ComplianceEvaluator, FinancialFigures, DEBT_REASON,
    LIQUIDITY_REASON, RECEIVABLES_REASON,
};

fn figures(ltd: f64, ta: f64, gw: f64) -> FinancialFigures {
    FinancialFigures::new(Some(ltd), Some(ta), Some(gw))
}

fn tech_company_info() -> CompanyInfo {
    CompanyInfo {
        market_cap: Some(1000.0),
        total_cash: Some(100.0),
        short_term_investments: Some(100.0),
        long_term_investments: Some(100.0),
        net_receivables: Some(100.0),
        sector: Some(String::from("Technology")),
        industry: Some(String::from("Software")),
        company_name: Some(String::from("Halal Tech")),
        business_summary: Some(String::from("A software company.")),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Ratios
// =============================================================================

#[test]
fn debt_ratio_matches_rounded_formula_for_complete_figures() {
    let cases = [
        (100.0, 1000.0, 100.0),
        (1.0, 3.0, 0.0),
        (250_000.0, 9_000_000.0, 1_234_567.0),
        (0.0, 10.0, 9.0),
        (7_500.0, 7_501.0, 1.0),
    ];

    for (ltd, ta, gw) in cases {
        let expected = round2(ltd / (ta - gw) * 100.0);
        assert_eq!(
            compute_debt_ratio(&figures(ltd, ta, gw)),
            Some(expected),
            "ltd={ltd} ta={ta} gw={gw}"
        );
    }
}

#[test]
fn debt_ratio_example_is_eleven_point_one_one() {
    assert_eq!(compute_debt_ratio(&figures(100.0, 1000.0, 100.0)), Some(11.11));
}

#[test]
fn debt_ratio_is_absent_for_unreported_or_non_positive_net_assets() {
    assert_eq!(
        compute_debt_ratio(&FinancialFigures::new(Some(100.0), Some(1000.0), None)),
        None
    );
    assert_eq!(compute_debt_ratio(&figures(100.0, 100.0, 100.0)), None);
    assert_eq!(compute_debt_ratio(&figures(100.0, 50.0, 100.0)), None);
}

#[test]
fn market_cap_ratios_are_zero_when_market_cap_is_missing_or_not_positive() {
    for market_cap in [None, Some(0.0), Some(-1.0)] {
        let info = CompanyInfo {
            market_cap,
            total_cash: Some(100.0),
            short_term_investments: Some(50.0),
            long_term_investments: Some(50.0),
            net_receivables: Some(25.0),
            ..CompanyInfo::default()
        };

        assert_eq!(compute_liquidity_ratio(&info), 0.0);
        assert_eq!(compute_receivables_ratio(&info), 0.0);
    }
}

#[test]
fn ratio_examples_match_expected_values() {
    let info = CompanyInfo {
        total_cash: Some(100.0),
        short_term_investments: Some(50.0),
        long_term_investments: Some(50.0),
        market_cap: Some(400.0),
        ..CompanyInfo::default()
    };
    assert_eq!(compute_liquidity_ratio(&info), 50.0);

    let info = CompanyInfo {
        net_receivables: Some(25.0),
        market_cap: Some(100.0),
        ..CompanyInfo::default()
    };
    assert_eq!(compute_receivables_ratio(&info), 25.0);
}

// =============================================================================
// Aggregate verdict
// =============================================================================

#[test]
fn clean_low_debt_company_is_fully_compliant() {
    // Given: a software company with modest debt and cash
    let result = evaluate_compliance(&figures(100.0, 1000.0, 100.0), &tech_company_info())
        .expect("verdict should be determinate");

    // Then: every check passes and no reasons are listed
    assert!(result.is_debt_compliant);
    assert!(result.is_liquidity_compliant);
    assert!(result.is_receivables_compliant);
    assert!(result.is_business_compliant);
    assert!(result.is_fully_compliant);
    assert!(result.non_compliant_reasons.is_empty());
}

#[test]
fn highly_leveraged_company_fails_on_debt() {
    let result = evaluate_compliance(&figures(400.0, 1000.0, 100.0), &tech_company_info())
        .expect("verdict should be determinate");

    assert_eq!(result.debt_ratio, Some(44.44));
    assert!(!result.is_debt_compliant);
    assert!(!result.is_fully_compliant);
    assert_eq!(result.non_compliant_reasons, vec![DEBT_REASON]);
}

#[test]
fn debt_ratio_at_exactly_thirty_three_fails() {
    let result = evaluate_compliance(&figures(33.0, 100.0, 0.0), &tech_company_info())
        .expect("determinate");

    assert_eq!(result.debt_ratio, Some(33.0));
    assert!(!result.is_debt_compliant);
}

#[test]
fn liquidity_and_receivables_that_round_onto_thirty_three_fail() {
    // Given: cash that is 32.996% of market cap, rounding to 33.00
    let liquid = CompanyInfo {
        market_cap: Some(100_000.0),
        total_cash: Some(32_996.0),
        short_term_investments: Some(0.0),
        long_term_investments: Some(0.0),
        net_receivables: Some(0.0),
        ..tech_company_info()
    };

    // When: the company is screened
    let result = evaluate_compliance(&figures(100.0, 1000.0, 100.0), &liquid).expect("determinate");

    // Then: the rounded ratio sits on the threshold and fails
    assert_eq!(result.liquidity_ratio, 33.0);
    assert!(!result.is_liquidity_compliant);
    assert_eq!(result.non_compliant_reasons, vec![LIQUIDITY_REASON]);

    // Given: receivables at exactly 33% of market cap
    let receivable = CompanyInfo {
        total_cash: Some(0.0),
        net_receivables: Some(33_000.0),
        ..liquid
    };

    let result =
        evaluate_compliance(&figures(100.0, 1000.0, 100.0), &receivable).expect("determinate");

    assert_eq!(result.receivables_ratio, 33.0);
    assert!(!result.is_receivables_compliant);
    assert_eq!(result.non_compliant_reasons, vec![RECEIVABLES_REASON]);
}

#[test]
fn cash_rich_company_fails_on_liquidity_and_receivables() {
    let info = CompanyInfo {
        total_cash: Some(300.0),
        short_term_investments: Some(30.0),
        net_receivables: Some(400.0),
        ..tech_company_info()
    };

    let result = evaluate_compliance(&figures(100.0, 1000.0, 100.0), &info).expect("determinate");

    assert_eq!(result.liquidity_ratio, 43.0);
    assert_eq!(result.receivables_ratio, 40.0);
    assert_eq!(
        result.non_compliant_reasons,
        vec![LIQUIDITY_REASON, RECEIVABLES_REASON]
    );
    assert!(!result.is_fully_compliant);
}

#[test]
fn excluded_sector_fails_regardless_of_ratios() {
    let info = CompanyInfo {
        sector: Some(String::from("Banks")),
        ..tech_company_info()
    };

    let result = evaluate_compliance(&figures(0.0, 1000.0, 0.0), &info).expect("determinate");

    assert!(result.is_debt_compliant);
    assert!(!result.is_business_compliant);
    assert!(!result.is_fully_compliant);
    assert!(!result.non_compliant_reasons.is_empty());
}

#[test]
fn prohibited_product_in_summary_fails_business_screen() {
    let info = CompanyInfo {
        business_summary: Some(String::from("Processes PORK and related meat products.")),
        ..tech_company_info()
    };

    let result = evaluate_compliance(&figures(100.0, 1000.0, 100.0), &info).expect("determinate");

    assert!(!result.is_business_compliant);
    assert_eq!(
        result.non_compliant_reasons,
        vec!["Business summary contains exclusion keyword"]
    );
}

#[test]
fn bank_of_pork_collects_every_business_reason() {
    let info = CompanyInfo {
        sector: Some(String::from("Banks")),
        industry: Some(String::from("Banking")),
        company_name: Some(String::from("Bank of Pork")),
        business_summary: Some(String::from("A bank that deals with pork products.")),
        ..tech_company_info()
    };

    let result = evaluate_compliance(&figures(100.0, 1000.0, 100.0), &info).expect("determinate");

    assert!(!result.is_business_compliant);
    assert_eq!(result.non_compliant_reasons.len(), 5);
    assert!(result
        .non_compliant_reasons
        .contains(&String::from("Sector \"Banks\" is excluded")));
}

#[test]
fn fully_compliant_iff_no_reasons() {
    let scenarios = [
        (figures(100.0, 1000.0, 100.0), tech_company_info()),
        (figures(900.0, 1000.0, 100.0), tech_company_info()),
        (
            figures(10.0, 1000.0, 0.0),
            CompanyInfo {
                industry: Some(String::from("Distillers & Vintners")),
                ..tech_company_info()
            },
        ),
        (figures(10.0, 1000.0, 0.0), CompanyInfo::default()),
    ];

    for (figures, info) in scenarios {
        let result = evaluate_compliance(&figures, &info).expect("determinate");
        assert_eq!(
            result.is_fully_compliant,
            result.non_compliant_reasons.is_empty(),
            "{result:?}"
        );
    }
}

// =============================================================================
// Indeterminate verdicts and documented asymmetry
// =============================================================================

#[test]
fn missing_goodwill_makes_verdict_indeterminate() {
    let figures = FinancialFigures::new(Some(100.0), Some(1000.0), None);
    let info = CompanyInfo {
        market_cap: Some(1000.0),
        ..CompanyInfo::default()
    };

    assert_eq!(evaluate_compliance(&figures, &info), None);
    assert_eq!(
        ComplianceEvaluator::evaluate(&figures, &info),
        Err(ComplianceError::DebtRatioUnavailable)
    );
}

#[test]
fn verdict_is_absent_exactly_when_debt_ratio_is_absent() {
    let info = tech_company_info();
    let candidates = [
        figures(100.0, 1000.0, 100.0),
        figures(100.0, 100.0, 100.0),
        figures(100.0, 50.0, 100.0),
        FinancialFigures::new(None, Some(1000.0), Some(0.0)),
        FinancialFigures::new(Some(5.0), None, Some(0.0)),
        FinancialFigures::default(),
    ];

    for figures in candidates {
        assert_eq!(
            evaluate_compliance(&figures, &info).is_none(),
            compute_debt_ratio(&figures).is_none(),
            "{figures:?}"
        );
    }
}

#[test]
fn missing_market_cap_is_documented_as_compliant_for_liquidity_and_receivables() {
    // The debt check fails closed on missing data, while the market-cap based
    // checks pass when market cap is missing. This asymmetry is intentional.
    let info = CompanyInfo {
        market_cap: None,
        total_cash: Some(1e15),
        net_receivables: Some(1e15),
        ..tech_company_info()
    };

    let result = evaluate_compliance(&figures(100.0, 1000.0, 100.0), &info).expect("determinate");

    assert_eq!(result.liquidity_ratio, 0.0);
    assert_eq!(result.receivables_ratio, 0.0);
    assert!(result.is_liquidity_compliant);
    assert!(result.is_receivables_compliant);
    assert!(result.is_fully_compliant);
}

#[test]
fn non_finite_input_never_yields_a_partial_result() {
    let info = CompanyInfo {
        total_cash: Some(f64::NAN),
        ..tech_company_info()
    };

    assert_eq!(
        evaluate_compliance(&figures(100.0, 1000.0, 100.0), &info),
        None
    );
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn repeated_evaluation_is_bit_identical() {
    let figures = figures(123.45, 6789.0, 1011.0);
    let info = tech_company_info();

    let first = evaluate_compliance(&figures, &info).expect("determinate");
    let second = evaluate_compliance(&figures, &info).expect("determinate");

    assert_eq!(first, second);
    assert_eq!(
        first.debt_ratio.map(f64::to_bits),
        second.debt_ratio.map(f64::to_bits)
    );
    assert_eq!(first.liquidity_ratio.to_bits(), second.liquidity_ratio.to_bits());
}

#[test]
fn concurrent_evaluations_agree() {
    let figures = figures(400.0, 1000.0, 100.0);
    let info = tech_company_info();
    let expected = evaluate_compliance(&figures, &info);

    std::thread::scope(|scope| {
        let handles = (0..8)
            .map(|_| scope.spawn(|| evaluate_compliance(&figures, &info)))
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().expect("thread should not panic"), expected);
        }
    });
}
