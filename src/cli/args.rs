//! Argument structs for pareto subcommands

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::parse::parse_epsilon;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Graph file: SQLite database (.db, .sqlite) or JSON edge list
    pub graph: PathBuf,

    /// Source node
    #[arg(long, short)]
    pub source: String,

    /// Only report the frontier at this node
    #[arg(long, short)]
    pub target: Option<String>,

    /// ε tolerance for frontier pruning (overrides config)
    #[arg(long, short, value_parser = parse_epsilon)]
    pub epsilon: Option<f64>,

    /// Stop after this many expansions (overrides config)
    #[arg(long)]
    pub max_expansions: Option<usize>,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Number of nodes in the chain
    #[arg(long, short, default_value_t = 100)]
    pub nodes: usize,

    /// ε tolerance for frontier pruning (overrides config)
    #[arg(long, short, value_parser = parse_epsilon)]
    pub epsilon: Option<f64>,
}

/// Shape of a generated graph
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Linear chain N0 -> N1 -> ... with fixed 3-component costs
    Chain,
    /// Seeded random out-edges with uniform [0, 1) costs
    Random,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output file; .db/.sqlite writes a database, anything else JSON
    pub output: PathBuf,

    /// Graph shape
    #[arg(long, short, value_enum, default_value = "chain")]
    pub kind: GraphKind,

    /// Number of nodes
    #[arg(long, short, default_value_t = 100)]
    pub nodes: usize,

    /// Out-degree per node (random only)
    #[arg(long, default_value_t = 3)]
    pub degree: usize,

    /// Cost components per edge (random only; defaults to config)
    #[arg(long)]
    pub dimensions: Option<usize>,

    /// RNG seed (random only)
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}
