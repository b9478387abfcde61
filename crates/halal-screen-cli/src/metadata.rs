use std::fmt::{Display, Formatter};

use halal_screen_core::{EnvelopeMeta, InputSource, ValidationError};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

pub const SCHEMA_VERSION: &str = "v1.0.0";

/// Request identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// 32-hex-digit trace identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(String);

impl TraceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Per-invocation metadata, turned into [`EnvelopeMeta`] once the command ran.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub request_id: RequestId,
    pub trace_id: TraceId,
    pub generated_at: OffsetDateTime,
    pub source: InputSource,
    pub warnings: Vec<String>,
}

impl Metadata {
    pub fn new(source: InputSource) -> Self {
        Self {
            request_id: RequestId::new_v4(),
            trace_id: TraceId::new(),
            generated_at: OffsetDateTime::now_utc(),
            source,
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn into_envelope_meta(self) -> Result<EnvelopeMeta, ValidationError> {
        let generated_at = self
            .generated_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.generated_at.unix_timestamp().to_string());

        let mut meta = EnvelopeMeta::new(
            self.request_id.to_string(),
            SCHEMA_VERSION,
            generated_at,
            self.source,
        )?
        .with_trace_id(self.trace_id.as_str())?;

        for warning in self.warnings {
            meta.push_warning(warning);
        }

        Ok(meta)
    }
}
