use halal_screen_core::{InputSource, Snapshot};
use tracing::info;

use crate::cli::EvaluateArgs;
use crate::error::CliError;

use super::{open_input, CommandResult};

pub fn run(args: &EvaluateArgs) -> Result<CommandResult, CliError> {
    let snapshot = Snapshot::from_reader(open_input(&args.input)?)?;
    let report = snapshot.screen();

    info!(
        input = %args.input.display(),
        symbol = report.symbol.as_ref().map(|symbol| symbol.as_str()),
        indeterminate = report.is_indeterminate(),
        "screened snapshot"
    );

    let mut result = CommandResult::from_report(&report, InputSource::Snapshot)?;
    if report.symbol.is_none() {
        result = result.with_warning("snapshot has no symbol");
    }

    Ok(result)
}
