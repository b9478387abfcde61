use thiserror::Error;

/// Validation and contract errors exposed by `halal-screen-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter, digit or '^': '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("trace_id must be 32 hex characters")]
    InvalidTraceId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Reasons an evaluation produces no verdict at all.
///
/// Both variants mean "compliance indeterminate"; callers must not read
/// either one as compliant or non-compliant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceError {
    #[error("debt ratio unavailable: long-term debt, total assets and goodwill/intangibles are required and net assets must be positive")]
    DebtRatioUnavailable,

    #[error("computation fault: '{field}' is not a finite number")]
    ComputationFault { field: &'static str },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("provider payload error: {0}")]
    Payload(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload(message.into())
    }
}
