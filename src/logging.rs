//! Tracing subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays clean. The filter comes
//! from `RUST_LOG` when set, otherwise `info`, or `debug` with `--verbose`.

use crate::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use crate::errors::{AppError, AppResult};
use std::io::IsTerminal;
use tracing::Span;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Builds the level filter for this invocation.
///
/// `--verbose` wins over `RUST_LOG`.
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_LOG_LEVEL);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber in `text` or `json` format.
///
/// # Errors
///
/// Returns `AppError::Config` if a global subscriber is already installed.
pub fn init_tracing(log_format: &str, verbose: bool) -> AppResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_timer(ChronoUtc::rfc_3339())
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let result = if log_format == LOG_FORMAT_JSON {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Opens the span that wraps a whole invocation, tagged with a fresh correlation id.
pub fn invocation_span() -> Span {
    let correlation_id = Uuid::new_v4();
    tracing::info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    )
}
