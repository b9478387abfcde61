mod evaluate;
mod ratios;
mod rules;
mod yahoo;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use halal_screen_core::{
    Envelope, EnvelopeError, InputSource, ScreenReport, ValidationError,
};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub source: InputSource,
}

impl CommandResult {
    pub fn ok(data: Value, source: InputSource) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            source,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }

    /// Wraps a screen report, flagging an indeterminate verdict as an error.
    pub fn from_report(report: &ScreenReport, source: InputSource) -> Result<Self, CliError> {
        let data = serde_json::to_value(report)?;
        let mut result = Self::ok(data, source);

        if report.is_indeterminate() {
            result = result.with_error(indeterminate_error()?);
        }

        Ok(result)
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let command_result = match &cli.command {
        Command::Evaluate(args) => evaluate::run(args)?,
        Command::Yahoo(args) => yahoo::run(args)?,
        Command::Ratios(args) => ratios::run(args)?,
        Command::Rules => rules::run()?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
        source,
    } = command_result;

    let mut metadata = Metadata::new(source);
    for warning in warnings {
        metadata.push_warning(warning);
    }

    let meta = metadata.into_envelope_meta()?;
    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

/// Opens `path` for reading; `-` means stdin.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>, CliError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|error| {
        CliError::Command(format!("cannot open '{}': {error}", path.display()))
    })?;
    Ok(Box::new(BufReader::new(file)))
}

fn indeterminate_error() -> Result<EnvelopeError, ValidationError> {
    EnvelopeError::new(
        "compliance_indeterminate",
        "compliance could not be determined: the debt ratio needs long-term debt, total assets \
and goodwill/intangibles with positive net assets, and all figures must be finite",
    )
}
