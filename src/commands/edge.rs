//! `pareto edge` commands
use pareto_core::cost::CostVector;
use pareto_core::error::Result;
use pareto_core::graph::{Graph, GraphMut};

use crate::cli::{EdgeCommands, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::open_database;

pub fn execute(ctx: &CommandContext, command: &EdgeCommands) -> Result<()> {
    match command {
        EdgeCommands::Add { db, from, to, cost } => {
            let mut graph = open_database(db)?;
            let cost = CostVector::with_dimensions(cost.clone(), graph.dimensions())?;
            let cost_text = cost.to_string();
            graph.add_edge(from, to, cost)?;
            tracing::debug!(from = %from, to = %to, cost = %cost_text, "added edge");

            report(ctx, "added", from, to, 1, || {
                println!("Added edge {} -> {} {}", from, to, cost_text);
            })
        }
        EdgeCommands::Remove { db, from, to } => {
            let mut graph = open_database(db)?;
            let removed = graph.remove_edge(from, to)?;

            report(ctx, "removed", from, to, removed, || {
                println!(
                    "Removed {} edge{} {} -> {}",
                    removed,
                    if removed == 1 { "" } else { "s" },
                    from,
                    to
                );
            })
        }
    }
}

fn report(
    ctx: &CommandContext,
    status: &str,
    from: &str,
    to: &str,
    edges: usize,
    human: impl FnOnce(),
) -> Result<()> {
    if ctx.cli.quiet {
        return Ok(());
    }
    match ctx.cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "status": status,
                    "from": from,
                    "to": to,
                    "edges": edges,
                })
            );
        }
        OutputFormat::Human => human(),
    }
    Ok(())
}
