//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use campusnet_core::campus::{Campus, CampusLoad};
use campusnet_core::config::{self, ResolvedConfig};
use campusnet_core::error::Result;

/// Resolve the configuration in effect, applying `--edges` / `--classes`
pub fn resolve_config(cli: &Cli, cwd: &Path) -> Result<ResolvedConfig> {
    let mut resolved = config::discover(cli.config.as_deref(), cwd)?;
    if let Some(path) = &cli.edges {
        resolved.override_edges(path, cwd);
    }
    if let Some(path) = &cli.classes {
        resolved.override_classes(path, cwd);
    }
    Ok(resolved)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a Path, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Discover the config and load both data files
    pub fn load_campus(&self) -> Result<(Campus, ResolvedConfig, CampusLoad)> {
        let config = resolve_config(self.cli, self.cwd)?;
        let (campus, load) = Campus::load(&config)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_campus");
        Ok((campus, config, load))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("campusnet {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths, edge closures and student zones over a campus network.");
        println!();
        println!("Run `campusnet --help` for usage information.");
        Ok(())
    }
}
