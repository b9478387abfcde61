use std::io::Read;

use halal_screen_core::{adapters::parse_quote_summary, InputSource, Ticker};
use tracing::info;

use crate::cli::YahooArgs;
use crate::error::CliError;

use super::{open_input, CommandResult};

pub fn run(args: &YahooArgs) -> Result<CommandResult, CliError> {
    let fallback_symbol = args.symbol.as_deref().map(Ticker::parse).transpose()?;

    let mut body = String::new();
    open_input(&args.input)?.read_to_string(&mut body)?;

    let snapshot = parse_quote_summary(&body, fallback_symbol.clone())?;
    let report = snapshot.screen();

    info!(
        symbol = report.symbol.as_ref().map(|symbol| symbol.as_str()),
        indeterminate = report.is_indeterminate(),
        "screened yahoo payload"
    );

    let mut result = CommandResult::from_report(&report, InputSource::Yahoo)?;

    if let (Some(requested), Some(reported)) = (&fallback_symbol, &report.symbol) {
        if requested != reported {
            result = result.with_warning(format!(
                "payload symbol {reported} differs from requested {requested}"
            ));
        }
    }

    if report.figures.goodwill_and_intangibles.is_none() && report.figures.total_assets.is_some() {
        result = result.with_warning(
            "balance sheet reports neither goodwill nor intangible assets; debt ratio is unavailable",
        );
    }

    Ok(result)
}
