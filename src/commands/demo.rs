//! `pareto demo` command

use pareto_core::bail_usage;
use pareto_core::error::Result;
use pareto_core::generate::{chain, node_name};
use pareto_core::search::pareto_search;

use crate::cli::DemoArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{criteria_for, interrupt_flag, print_report};

/// Build the chain graph and search it from `N0`
pub fn execute(ctx: &CommandContext, args: &DemoArgs) -> Result<()> {
    if args.nodes == 0 {
        bail_usage!("--nodes must be at least 1");
    }

    let graph = chain(args.nodes)?;

    let mut opts = ctx.config.search_options();
    if let Some(epsilon) = args.epsilon {
        opts.epsilon = epsilon;
    }
    opts.cancel = Some(interrupt_flag());

    let result = pareto_search(&graph, &node_name(0), &opts)?;
    tracing::info!(
        nodes = args.nodes,
        expansions = result.stats.expansions,
        elapsed = ?result.stats.elapsed,
        "demo search finished"
    );

    let criteria = criteria_for(&ctx.config, result.dimensions);
    print_report(ctx.cli, &result.report(None, &criteria))
}
