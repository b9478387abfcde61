//! Diagnostic logging to stderr.
//!
//! Stdout carries the envelope, so log lines never go there. `RUST_LOG`
//! overrides the `--log-level` flag when set.

use tracing_subscriber::EnvFilter;

pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
    {
        eprintln!("warning: logging disabled: {error}");
        return;
    }

    tracing::debug!(log_level, "logging initialized");
}
