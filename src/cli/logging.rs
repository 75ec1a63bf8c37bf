//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so that stdout carries only the issue listing. The
//! filter comes from `RUST_LOG` and defaults to `issuegate=info`. Set
//! `LOG_FORMAT=json` for one JSON object per line.

use std::env;
use std::io;

use issuegate::IssueError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_DIRECTIVE: &str = "issuegate=info";

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`IssueError::Configuration`] when a subscriber is already
/// installed.
pub fn init_tracing() -> Result<(), IssueError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if json_requested(env::var("LOG_FORMAT").ok().as_deref()) {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(io::stderr).with_ansi(false))
            .try_init()
    };

    result.map_err(|error| IssueError::Configuration {
        message: format!("failed to initialise logging: {error}"),
    })
}

fn json_requested(log_format: Option<&str>) -> bool {
    log_format.is_some_and(|format| format.trim().eq_ignore_ascii_case("json"))
}
