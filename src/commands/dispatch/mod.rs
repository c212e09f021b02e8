//! Command dispatch logic for campusnet

use std::time::Instant;

use crate::cli::paths::working_dir;
use crate::cli::Cli;
use campusnet_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = working_dir();

    debug!(elapsed = ?start.elapsed(), cwd = %cwd.display(), "resolve_cwd");

    let ctx = CommandContext::new(cli, &cwd, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
