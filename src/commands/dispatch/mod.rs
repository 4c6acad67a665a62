//! Command dispatch logic for pareto

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use pareto_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Search(args) => commands::search::execute(ctx, args),
            Commands::Demo(args) => commands::demo::execute(ctx, args),
            Commands::Generate(args) => commands::generate::execute(ctx, args),
            Commands::Edge { command } => commands::edge::execute(ctx, command),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
