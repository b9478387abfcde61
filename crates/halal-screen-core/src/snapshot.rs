//! Snapshot documents and screen reports.
//!
//! A snapshot bundles the two input records for one ticker. Screening it
//! yields a [`ScreenReport`]: the records echoed back with the verdict, which
//! is what presentation layers consume.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{evaluate_compliance, CompanyInfo, ComplianceResult, CoreError, FinancialFigures, Ticker};

/// Point-in-time inputs for one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub symbol: Option<Ticker>,
    #[serde(default, alias = "financials")]
    pub figures: FinancialFigures,
    #[serde(default)]
    pub info: CompanyInfo,
}

impl Snapshot {
    pub fn new(symbol: Option<Ticker>, figures: FinancialFigures, info: CompanyInfo) -> Self {
        Self {
            symbol,
            figures,
            info,
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        let snapshot: Self = serde_json::from_str(input)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        let snapshot: Self = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading snapshot");
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.figures.validate()?;
        self.info.validate()?;
        Ok(())
    }

    /// Evaluates the snapshot. The records are cloned into the report unchanged.
    pub fn screen(&self) -> ScreenReport {
        ScreenReport {
            symbol: self.symbol.clone(),
            compliance: evaluate_compliance(&self.figures, &self.info),
            figures: self.figures.clone(),
            info: self.info.clone(),
        }
    }
}

/// Records plus verdict for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenReport {
    pub symbol: Option<Ticker>,
    pub figures: FinancialFigures,
    pub info: CompanyInfo,
    /// `None` when compliance is indeterminate.
    pub compliance: Option<ComplianceResult>,
}

impl ScreenReport {
    pub fn is_indeterminate(&self) -> bool {
        self.compliance.is_none()
    }
}
