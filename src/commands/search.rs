//! `pareto search` command

use tracing::debug;

use pareto_core::error::{ParetoError, Result};
use pareto_core::search::pareto_search;

use crate::cli::SearchArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{criteria_for, interrupt_flag, load_graph, print_report};

/// Execute the search command
///
/// Loads the graph, runs the label-setting search from `--source` and prints
/// the frontier of every reached node (or only `--target`).
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let graph = load_graph(&args.graph)?;
    debug!(elapsed = ?ctx.start.elapsed(), "load_graph");

    if let Some(target) = &args.target {
        if !graph.contains(target)? {
            return Err(ParetoError::unknown_node(target.as_str()));
        }
    }

    let mut opts = ctx.config.search_options();
    if let Some(epsilon) = args.epsilon {
        opts.epsilon = epsilon;
    }
    if let Some(max) = args.max_expansions {
        opts.max_expansions = Some(max);
    }
    opts.cancel = Some(interrupt_flag());

    let result = pareto_search(graph.as_ref(), &args.source, &opts)?;
    debug!(elapsed = ?ctx.start.elapsed(), "search");

    let criteria = criteria_for(&ctx.config, result.dimensions);
    let report = result.report(args.target.as_deref(), &criteria);
    print_report(ctx.cli, &report)
}
