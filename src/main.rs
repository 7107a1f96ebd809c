//! Runproj: run tests, docs builds, or scripts in an isolated project environment.
//!
//! This is the main entry point for the `runproj` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and maps
//! the result to an exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod launch;
pub mod logging;
pub mod prepare;

#[cfg(all(test, unix))]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);

    match commands::dispatch(cli.command, cli.config.as_deref()) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
