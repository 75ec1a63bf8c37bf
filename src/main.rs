//! Issuegate CLI entrypoint for listing repository issues.

use std::io::{self, Write};
use std::process::ExitCode;

use issuegate::{IssueError, IssuegateConfig};
use ortho_config::OrthoConfig;

mod cli;

fn main() -> ExitCode {
    if let Err(error) = cli::logging::init_tracing()
        && writeln!(io::stderr().lock(), "{error}").is_err()
    {
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "list issues failed");
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), IssueError> {
    let config = load_config()?;
    let mut stdout = io::stdout().lock();
    cli::list_issues::run(&config, &mut stdout)?;
    stdout.flush().map_err(|error| cli::output::io_error(&error))
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IssueError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<IssuegateConfig, IssueError> {
    IssuegateConfig::load().map_err(|error| IssueError::Configuration {
        message: error.to_string(),
    })
}
