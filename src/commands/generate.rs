//! `pareto generate` command

use std::fs;
use std::path::{Path, PathBuf};

use pareto_core::error::Result;
use pareto_core::generate::{chain, random};
use pareto_core::graph::{EdgeList, SqliteGraph};
use pareto_core::{bail_invalid, bail_usage};

use crate::cli::{GenerateArgs, GraphKind, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::is_sqlite_path;

/// Chain graphs always carry three cost components
const CHAIN_DIMENSIONS: usize = 3;

/// Execute the generate command
pub fn execute(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail_usage!(format!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        ));
    }

    let graph = match args.kind {
        GraphKind::Chain => {
            if let Some(dimensions) = args.dimensions {
                if dimensions != CHAIN_DIMENSIONS {
                    bail_invalid!("dimensions for chain graph", dimensions);
                }
            }
            chain(args.nodes)?
        }
        GraphKind::Random => random(
            args.nodes,
            args.degree,
            args.dimensions.unwrap_or(ctx.config.search.dimensions),
            args.seed,
        )?,
    };

    let list = EdgeList::from_graph(&graph)?;
    write_atomically(&list, &args.output)?;

    if ctx.cli.quiet {
        return Ok(());
    }

    let kind = format!("{:?}", args.kind).to_lowercase();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "status": "created",
                    "path": args.output.display().to_string(),
                    "kind": kind,
                    "dimensions": list.dimensions,
                    "nodes": list.nodes.len(),
                    "edges": list.edges.len(),
                })
            );
        }
        OutputFormat::Human => {
            println!(
                "Generated {} graph: {} nodes, {} edges, {} dimensions -> {}",
                kind,
                list.nodes.len(),
                list.edges.len(),
                list.dimensions,
                args.output.display()
            );
        }
    }
    Ok(())
}

/// Write to a sibling file first so an existing output survives any failure
fn write_atomically(list: &EdgeList, output: &Path) -> Result<()> {
    let partial = partial_path(output);
    if partial.exists() {
        fs::remove_file(&partial)?;
    }

    let written = write_list(list, &partial, is_sqlite_path(output));
    if let Err(e) = written {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }
    fs::rename(&partial, output)?;
    Ok(())
}

fn write_list(list: &EdgeList, path: &Path, sqlite: bool) -> Result<()> {
    if sqlite {
        let mut db = SqliteGraph::open(path, Some(list.dimensions))?;
        db.import(list)
    } else {
        list.save(path)
    }
}

fn partial_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!(".{}.partial", name))
}
