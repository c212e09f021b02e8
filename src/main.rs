//! Campusnet - campus travel network CLI
//!
//! Loads a network of locations and travel times from CSV, then answers
//! shortest-path, connectivity and student zone queries or runs a command
//! script against it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use campusnet_core::error::{CampusError, ExitCode as CampusExitCode};
use campusnet_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json(env::args().skip(1)) => return json_parse_failure(err),
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(CampusExitCode::Success as u8),
        Err(e) => report(&cli, &e),
    }
}

/// Print a command failure in the requested format and pick the exit code
fn report(cli: &Cli, error: &CampusError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Convert a clap failure into the JSON error envelope.
///
/// Help and version output still go through clap unchanged.
fn json_parse_failure(err: clap::Error) -> ExitCode {
    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::TooManyValues => CampusError::UsageError(err.to_string()),
        _ => CampusError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// Scan raw arguments for `--format json`; clap has not produced a `Cli` yet
fn wants_json<I: Iterator<Item = String>>(mut args: I) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
