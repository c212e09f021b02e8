//! Command implementations for all campusnet commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use campusnet_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use std::path::Path;

    use crate::commands::{connected, info, path, run, status, zone};
    use campusnet_core::graph::NodeId;
    use campusnet_core::registry::ClassCode;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Run { script } => execute_run(ctx, script.as_deref()),
            Commands::Path { from, to } => execute_path(ctx, *from, *to),
            Commands::Connected { from, to } => execute_connected(ctx, *from, *to),
            Commands::Status { from, to } => execute_status(ctx, *from, *to),
            Commands::Zone {
                residence,
                class_codes,
                locations,
            } => execute_zone(ctx, *residence, class_codes, locations),
            Commands::Info => execute_info(ctx),
        }
    }

    fn execute_run(ctx: &CommandContext, script: Option<&Path>) -> Result<()> {
        let (mut campus, _, _) = ctx.load_campus()?;
        run::execute(ctx.cli, &mut campus, script)
    }

    fn execute_path(ctx: &CommandContext, from: NodeId, to: NodeId) -> Result<()> {
        let (campus, _, _) = ctx.load_campus()?;
        path::execute(ctx.cli, &campus, from, to)
    }

    fn execute_connected(ctx: &CommandContext, from: NodeId, to: NodeId) -> Result<()> {
        let (campus, _, _) = ctx.load_campus()?;
        connected::execute(ctx.cli, &campus, from, to)
    }

    fn execute_status(ctx: &CommandContext, from: NodeId, to: NodeId) -> Result<()> {
        let (campus, _, _) = ctx.load_campus()?;
        status::execute(ctx.cli, &campus, from, to)
    }

    fn execute_zone(
        ctx: &CommandContext,
        residence: NodeId,
        class_codes: &[ClassCode],
        locations: &[NodeId],
    ) -> Result<()> {
        let (campus, _, _) = ctx.load_campus()?;
        zone::execute(ctx.cli, &campus, residence, class_codes, locations)
    }

    fn execute_info(ctx: &CommandContext) -> Result<()> {
        let (campus, config, load) = ctx.load_campus()?;
        info::execute(ctx.cli, &campus, &config, &load)
    }
}
