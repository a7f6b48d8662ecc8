//! Tracing setup. All log output goes to stderr; stdout carries only the PNG.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{CliConfig, LogFormat, DEFAULT_LOG_FILTER};

/// Install the global subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init_tracing(config: &CliConfig) {
    let (filter, bad_filter) = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e.to_string())),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let installed = match config.log_format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_err() {
        return;
    }

    if let Some(e) = bad_filter {
        warn!(filter = %config.log_filter, error = %e, "Invalid RUST_LOG, using {}", DEFAULT_LOG_FILTER);
    }
    for warning in &config.warnings {
        warn!("{}", warning);
    }
}
