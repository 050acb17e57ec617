//! Tracing initialization.
//!
//! Logs go to **stderr**: with the stdio transport, stdout carries the MCP
//! framing and must not be written to.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Controls the log level and filtering. Examples:
//!   - `RUST_LOG=debug` - Enable debug logging for all modules
//!   - `RUST_LOG=kolors_mcp_image=debug` - Enable debug for the server crate
//!   - `RUST_LOG=warn,kolors_mcp_common=debug` - Warn by default, debug for common

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
    registry::Registry,
};

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync + 'static {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    Registry::default().with(filter).with(fmt_layer)
}

/// Initialize the tracing subscriber, defaulting to `info` when `RUST_LOG` is unset.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing() {
    init_tracing_with_default("info");
}

/// Initialize tracing with a custom default level.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use kolors_mcp_common::tracing::init_tracing_with_default;
///
/// init_tracing_with_default("debug");
/// tracing::debug!("verbose logging enabled");
/// ```
pub fn init_tracing_with_default(default_level: &str) {
    subscriber(env_filter(default_level)).init();
}

/// Try to initialize tracing, returning an error if already initialized.
///
/// ```
/// use kolors_mcp_common::tracing::try_init_tracing;
///
/// let _ = try_init_tracing();
/// ```
pub fn try_init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    subscriber(env_filter("info")).try_init()
}
