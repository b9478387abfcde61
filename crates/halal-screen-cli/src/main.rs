mod cli;
mod commands;
mod error;
mod logging;
mod metadata;
mod output;

use std::process::ExitCode;

use clap::Parser;
use halal_screen_core::Envelope;
use serde_json::Value;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let envelope = commands::run(&cli)?;
    output::render(&envelope, cli.format, cli.pretty)?;

    exit_status(&envelope, cli.strict).map(ExitCode::from)
}

/// Exit status for a rendered envelope: 0 on success, 3 when the envelope
/// carries errors. Strict mode turns any warning or error into a failure.
fn exit_status(envelope: &Envelope<Value>, strict: bool) -> Result<u8, CliError> {
    if strict && (!envelope.meta.warnings.is_empty() || !envelope.errors.is_empty()) {
        return Err(CliError::StrictModeViolation {
            warning_count: envelope.meta.warnings.len(),
            error_count: envelope.errors.len(),
        });
    }

    if !envelope.errors.is_empty() {
        return Ok(3);
    }

    Ok(0)
}
