//! Shared helpers for pareto commands

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use pareto_core::config::ParetoConfig;
use pareto_core::error::{ParetoError, Result};
use pareto_core::format::format_path;
use pareto_core::graph::{EdgeList, Graph, SqliteGraph};
use pareto_core::search::SearchReport;
use pareto_core::trace_time;

use crate::cli::{Cli, OutputFormat};

/// File extensions opened as SQLite graph databases
const SQLITE_EXTENSIONS: &[&str] = &["db", "sqlite", "sqlite3"];

pub fn is_sqlite_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SQLITE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Open an existing graph file: SQLite by extension, JSON edge list otherwise
pub fn load_graph(path: &Path) -> Result<Box<dyn Graph>> {
    if !path.is_file() {
        return Err(ParetoError::UsageError(format!(
            "graph file not found: {}",
            path.display()
        )));
    }

    let start = Instant::now();
    let graph: Box<dyn Graph> = if is_sqlite_path(path) {
        Box::new(SqliteGraph::open(path, None)?)
    } else {
        Box::new(EdgeList::load(path)?.into_graph()?)
    };
    trace_time!(start, "load_graph", dimensions = graph.dimensions());
    Ok(graph)
}

/// Open a SQLite graph that must already exist
pub fn open_database(path: &Path) -> Result<SqliteGraph> {
    if !path.is_file() {
        return Err(ParetoError::UsageError(format!(
            "graph database not found: {}",
            path.display()
        )));
    }
    if !is_sqlite_path(path) {
        return Err(ParetoError::UsageError(format!(
            "not a SQLite graph (expected .db or .sqlite): {}",
            path.display()
        )));
    }
    SqliteGraph::open(path, None)
}

/// Cancellation flag set by Ctrl-C
pub fn interrupt_flag() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    interrupted
}

/// Configured criteria names, if they fit the graph's dimensionality
pub fn criteria_for(config: &ParetoConfig, dimensions: usize) -> Vec<String> {
    if config.search.criteria.len() == dimensions {
        config.search.criteria.clone()
    } else {
        if !config.search.criteria.is_empty() {
            tracing::debug!(
                configured = config.search.criteria.len(),
                dimensions,
                "ignoring criteria names that do not match graph dimensions"
            );
        }
        Vec::new()
    }
}

pub fn print_report(cli: &Cli, report: &SearchReport) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Human => print_report_human(cli, report),
    }
    Ok(())
}

fn print_report_human(cli: &Cli, report: &SearchReport) {
    if !cli.quiet {
        let stats = &report.stats;
        println!(
            "Pareto search from {} ({} dimensions, epsilon {})",
            report.source, report.dimensions, report.epsilon
        );
        println!(
            "{} expansions, {} candidates, {} labels at {} nodes in {:.2} ms",
            stats.expansions, stats.candidates, stats.labels, stats.nodes_reached, stats.elapsed_ms
        );
        println!(
            "offers: {} attempted, {} kept, {} pruned, {} removed",
            stats.offers.attempted, stats.offers.kept, stats.offers.pruned, stats.offers.removed
        );
        if let Some(reason) = &report.truncation_reason {
            println!("truncated: {}", reason);
        }
        println!();
    }

    if report.frontiers.is_empty() && !cli.quiet {
        println!("No Pareto paths found.");
    }

    for frontier in &report.frontiers {
        let n = frontier.paths.len();
        println!("{} ({} path{})", frontier.node, n, if n == 1 { "" } else { "s" });
        for path in &frontier.paths {
            println!("  {}", format_path(path, &report.criteria));
        }
    }
}
