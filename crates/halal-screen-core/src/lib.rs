//! # Halal Screen Core
//!
//! Shariah compliance screening for listed companies.
//!
//! ## Overview
//!
//! Given a balance-sheet snapshot and company metadata for one ticker, the
//! crate computes three financial ratios, runs a business-activity exclusion
//! screen and folds everything into a single [`ComplianceResult`]. Every
//! operation is a pure function: no network, disk or clock access happens
//! during evaluation, and identical inputs always give identical results.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ratios`] | Debt, liquidity and receivables ratios |
//! | [`business`] | Keyword, sector and industry exclusions |
//! | [`evaluator`] | Aggregate verdict and reasons |
//! | [`domain`] | Input records, result record, tickers |
//! | [`snapshot`] | Snapshot documents and screen reports |
//! | [`adapters`] | Provider payload mapping (Yahoo `quoteSummary`) |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`source`] | Input source identifiers |
//!
//! ## Quick Start
//!
//! ```rust
//! use halal_screen_core::{evaluate_compliance, CompanyInfo, FinancialFigures};
//!
//! let figures = FinancialFigures::new(Some(100.0), Some(1000.0), Some(100.0));
//! let info = CompanyInfo {
//!     market_cap: Some(1000.0),
//!     sector: Some("Technology".into()),
//!     ..CompanyInfo::default()
//! };
//!
//! let result = evaluate_compliance(&figures, &info).expect("determinate");
//! assert_eq!(result.debt_ratio, Some(11.11));
//! assert!(result.is_fully_compliant);
//! ```
//!
//! ## Indeterminate Results
//!
//! [`evaluate_compliance`] returns `None` when the debt ratio cannot be
//! computed or any input is not a finite number. [`ComplianceEvaluator`]
//! exposes the same evaluation with the reason as a [`ComplianceError`].

pub mod adapters;
pub mod business;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod evaluator;
pub mod ratios;
pub mod snapshot;
pub mod source;

pub use business::{
    contains_exclusion_keyword, screen_business, BusinessVerdict, EXCLUDED_INDUSTRIES,
    EXCLUDED_SECTORS, EXCLUSION_KEYWORDS,
};
pub use domain::{CompanyInfo, ComplianceResult, FinancialFigures, Ticker};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{ComplianceError, CoreError, ValidationError};
pub use evaluator::{
    evaluate_compliance, ComplianceEvaluator, DEBT_REASON, LIQUIDITY_REASON, RECEIVABLES_REASON,
};
pub use ratios::{
    compute_debt_ratio, compute_liquidity_ratio, compute_receivables_ratio, COMPLIANCE_THRESHOLD,
};
pub use snapshot::{ScreenReport, Snapshot};
pub use source::InputSource;
