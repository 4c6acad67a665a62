//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use pareto_core::config::ParetoConfig;
use pareto_core::error::Result;

/// Load `--config` if given, otherwise `pareto.toml` from the working directory
pub fn load_config(cli: &Cli) -> Result<ParetoConfig> {
    match &cli.config {
        Some(path) => ParetoConfig::load(path),
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            ParetoConfig::discover(&cwd)
        }
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: ParetoConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = load_config(cli)?;
        Ok(Self { cli, config, start })
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
        println!("pareto {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Multi-criteria Pareto path search.");
        println!();
        println!("Run `pareto --help` for usage information.");
        Ok(())
    }
}
