//! Business-activity exclusion screen.
//!
//! Company metadata is checked against three fixed reference lists: a keyword
//! list matched as lowercase substrings of free text, and exact-match lists of
//! excluded sectors and industries. Every hit is reported, not just the first.

use serde::{Deserialize, Serialize};

use crate::CompanyInfo;

/// Lowercase keywords matched as substrings of name, sector, industry and summary.
pub const EXCLUSION_KEYWORDS: &[&str] = &[
    "alcohol",
    "gambling",
    "casino",
    "betting",
    "tobacco",
    "cigarette",
    "pork",
    "swine",
    "weapons",
    "firearm",
    "defense",
    "adult",
    "porn",
    "sex",
    "bank",
    "insurance",
    "asset management",
    "interest",
    "mortgage",
    "loan",
    "credit",
];

/// Sector labels excluded on exact match.
pub const EXCLUDED_SECTORS: &[&str] = &[
    "Banks",
    "Insurance",
    "Diversified Financials",
    "Consumer Finance",
    "Tobacco",
    "Casinos & Gaming",
    "Aerospace & Defense",
    "Beverages",
    "Food Products",
];

/// Industry labels excluded on exact match.
pub const EXCLUDED_INDUSTRIES: &[&str] = &[
    "Tobacco",
    "Casinos & Gaming",
    "Aerospace & Defense",
    "Brewers",
    "Distillers & Vintners",
    "Packaged Foods & Meats",
    "Pornography",
    "Adult Entertainment",
    "Banks",
    "Insurance",
];

/// Result of the business-activity screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessVerdict {
    pub compliant: bool,
    pub reasons: Vec<String>,
}

impl BusinessVerdict {
    fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            compliant: reasons.is_empty(),
            reasons,
        }
    }
}

/// Runs every exclusion check against `info`.
///
/// Reasons come out in a fixed order: keyword hits on company name, sector,
/// industry and summary, then the exact sector match, then the exact industry
/// match. Absent fields are skipped.
pub fn screen_business(info: &CompanyInfo) -> BusinessVerdict {
    let keyword_checks = [
        (info.company_name.as_deref(), "Company name"),
        (info.sector.as_deref(), "Sector"),
        (info.industry.as_deref(), "Industry"),
        (info.business_summary.as_deref(), "Business summary"),
    ];

    let mut reasons = keyword_checks
        .into_iter()
        .filter(|(text, _)| text.is_some_and(contains_exclusion_keyword))
        .map(|(_, label)| format!("{label} contains exclusion keyword"))
        .collect::<Vec<_>>();

    if let Some(sector) = info.sector.as_deref() {
        if EXCLUDED_SECTORS.contains(&sector) {
            reasons.push(format!("Sector \"{sector}\" is excluded"));
        }
    }

    if let Some(industry) = info.industry.as_deref() {
        if EXCLUDED_INDUSTRIES.contains(&industry) {
            reasons.push(format!("Industry \"{industry}\" is excluded"));
        }
    }

    BusinessVerdict::from_reasons(reasons)
}

/// Case-insensitive substring match against [`EXCLUSION_KEYWORDS`].
pub fn contains_exclusion_keyword(text: &str) -> bool {
    matched_keyword(text).is_some()
}

/// First keyword (in list order) found in `text`.
pub fn matched_keyword(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        return None;
    }

    let lower = text.to_lowercase();
    EXCLUSION_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lower.contains(keyword))
}
