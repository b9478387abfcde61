//! CLI argument definitions for halal-screen.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `evaluate` | Screen a snapshot document |
//! | `yahoo` | Screen a Yahoo `quoteSummary` payload |
//! | `ratios` | Compute the three ratios from figures given as flags |
//! | `rules` | Print the threshold and exclusion lists |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings and errors as failures |
//! | `--log-level` | `warn` | Log filter when `RUST_LOG` is unset |
//!
//! # Examples
//!
//! ```bash
//! halal-screen evaluate snapshot.json --pretty
//! curl -s "$QUOTE_SUMMARY_URL" | halal-screen yahoo - --symbol AAPL
//! halal-screen ratios --long-term-debt 100 --total-assets 1000 --goodwill 100
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Shariah compliance screening for listed companies.
#[derive(Debug, Parser)]
#[command(
    name = "halal-screen",
    author,
    version,
    about = "Shariah compliance screening for listed companies",
    long_about = "Evaluates a company's balance sheet and profile against a fixed \
Shariah screen: debt, liquidity and receivables ratios below 33% and no \
excluded business activity.\n\
\n\
Input is read from files or stdin; nothing is fetched over the network."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Log filter used when RUST_LOG is unset (e.g. info, debug).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Screen a snapshot document holding `figures` and `info` records.
    ///
    /// # Examples
    ///
    ///   halal-screen evaluate snapshot.json
    ///   cat snapshot.json | halal-screen evaluate -
    Evaluate(EvaluateArgs),

    /// Screen a Yahoo quoteSummary response body.
    ///
    /// The body must include the price, assetProfile, financialData and
    /// balanceSheetHistory modules.
    Yahoo(YahooArgs),

    /// Compute debt, liquidity and receivables ratios from raw figures.
    Ratios(RatiosArgs),

    /// Print the compliance threshold and exclusion lists.
    Rules,
}

/// Arguments for the `evaluate` command.
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Snapshot JSON file, or `-` for stdin.
    pub input: PathBuf,
}

/// Arguments for the `yahoo` command.
#[derive(Debug, Args)]
pub struct YahooArgs {
    /// quoteSummary JSON file, or `-` for stdin.
    pub input: PathBuf,

    /// Ticker to report when the payload carries none.
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Arguments for the `ratios` command.
#[derive(Debug, Args)]
pub struct RatiosArgs {
    #[arg(long)]
    pub long_term_debt: Option<f64>,

    #[arg(long)]
    pub total_assets: Option<f64>,

    /// Goodwill plus other intangible assets.
    #[arg(long)]
    pub goodwill: Option<f64>,

    #[arg(long)]
    pub market_cap: Option<f64>,

    #[arg(long)]
    pub total_cash: Option<f64>,

    #[arg(long)]
    pub short_term_investments: Option<f64>,

    #[arg(long)]
    pub long_term_investments: Option<f64>,

    #[arg(long)]
    pub net_receivables: Option<f64>,
}
