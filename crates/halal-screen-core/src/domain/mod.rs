//! # Domain Models
//!
//! Plain records exchanged across the screening boundary.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FinancialFigures`] | Balance-sheet figures feeding the debt ratio |
//! | [`CompanyInfo`] | Market data and profile text feeding the remaining checks |
//! | [`ComplianceResult`] | Ratios, sub-verdicts and reasons for one evaluation |
//! | [`Ticker`] | Normalized ticker symbol |
//!
//! Every numeric field is optional. `None` means the provider did not report
//! the figure, which is not the same thing as a reported zero.

mod models;
mod ticker;

pub use models::{CompanyInfo, ComplianceResult, FinancialFigures};
pub use ticker::Ticker;
