use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Where the screened records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    /// A snapshot document holding both records.
    Snapshot,
    /// A Yahoo `quoteSummary` payload.
    Yahoo,
    /// Figures typed on the command line.
    Manual,
}

impl InputSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::Yahoo => "yahoo",
            Self::Manual => "manual",
        }
    }
}

impl Display for InputSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
