//! CLI argument parsing for pareto
//!
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod args;
pub mod edge;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DemoArgs, GenerateArgs, GraphKind, SearchArgs};
pub use edge::EdgeCommands;
pub use pareto_core::format::OutputFormat;
use parse::parse_format;

/// Pareto - multi-criteria shortest path search
#[derive(Parser, Debug)]
#[command(name = "pareto")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, or a full EnvFilter directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ./pareto.toml when present)
    #[arg(long, global = true, env = "PARETO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute Pareto frontiers from a source node
    Search(SearchArgs),

    /// Run the search on a generated chain graph
    Demo(DemoArgs),

    /// Write a generated graph to a JSON or SQLite file
    Generate(GenerateArgs),

    /// Add or remove edges in a SQLite graph
    Edge {
        #[command(subcommand)]
        command: EdgeCommands,
    },
}
