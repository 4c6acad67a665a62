//! Edge subcommands for mutating SQLite graphs

use std::path::PathBuf;

use clap::Subcommand;

use super::parse::parse_cost_component;

/// Edge subcommands
#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// Add a directed edge (creates missing endpoints)
    Add {
        /// SQLite graph database
        db: PathBuf,

        /// Source node
        from: String,

        /// Target node
        to: String,

        /// Cost components, one per dimension
        #[arg(required = true, num_args = 1.., value_parser = parse_cost_component, allow_negative_numbers = true)]
        cost: Vec<f64>,
    },

    /// Remove every edge from one node to another
    Remove {
        /// SQLite graph database
        db: PathBuf,

        /// Source node
        from: String,

        /// Target node
        to: String,
    },
}
