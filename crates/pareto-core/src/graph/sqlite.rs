//! SQLite-backed graph
//!
//! Adjacency lives in the database and is queried lazily on every call, so
//! the search never holds more of the graph in memory than one node's
//! outgoing edges.

mod schema;

use std::path::Path;
use std::time::Instant;

use rusqlite::{params, Connection, Transaction};

use crate::cost::{CostVector, DEFAULT_DIMENSIONS};
use crate::error::{ParetoError, Result};
use crate::graph::{check_dimensions, check_edge_cost, EdgeList, Graph, GraphMut};
use crate::label::NodeId;
use crate::{map_db_err, trace_time};

pub use schema::CURRENT_SCHEMA_VERSION;
use schema::SchemaCreateResult;

/// Graph persisted in a SQLite database
#[derive(Debug)]
pub struct SqliteGraph {
    conn: Connection,
    dimensions: usize,
}

impl SqliteGraph {
    /// Open or create a graph database.
    ///
    /// A fresh database records `dimensions` (default 3). An existing one
    /// keeps its stored dimensionality; requesting a different one fails with
    /// `DimensionMismatch`.
    pub fn open(path: &Path, dimensions: Option<usize>) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| map_db_err!("open database", e))?;
        Self::from_connection(conn, dimensions)
    }

    /// Create a throwaway graph in memory (tests, scratch work)
    pub fn open_in_memory(dimensions: usize) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| map_db_err!("open in-memory database", e))?;
        Self::from_connection(conn, Some(dimensions))
    }

    fn from_connection(conn: Connection, dimensions: Option<usize>) -> Result<Self> {
        match schema::create_schema(&conn)
            .map_err(|e| map_db_err!("create database schema", e))?
        {
            SchemaCreateResult::Unsupported(v) => {
                return Err(ParetoError::Other(format!(
                    "unsupported graph schema version {} (expected {})",
                    v, CURRENT_SCHEMA_VERSION
                )));
            }
            SchemaCreateResult::Created => tracing::debug!("created graph schema"),
            SchemaCreateResult::Existing => {}
        }

        let stored = schema::get_meta(&conn, "dimensions")
            .map_err(|e| map_db_err!("read dimensions", e))?
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|_| ParetoError::invalid_value("stored dimensions", s))
            })
            .transpose()?;

        let dimensions = match (stored, dimensions) {
            (Some(expected), Some(found)) if expected != found => {
                return Err(ParetoError::DimensionMismatch { expected, found });
            }
            (Some(stored), _) => stored,
            (None, requested) => {
                let dimensions = requested.unwrap_or(DEFAULT_DIMENSIONS);
                check_dimensions(dimensions)?;
                schema::set_meta(&conn, "dimensions", &dimensions.to_string())
                    .map_err(|e| map_db_err!("store dimensions", e))?;
                dimensions
            }
        };

        Ok(SqliteGraph { conn, dimensions })
    }

    /// Bulk-load an edge list in a single transaction
    pub fn import(&mut self, list: &EdgeList) -> Result<()> {
        if list.dimensions != self.dimensions {
            return Err(ParetoError::DimensionMismatch {
                expected: self.dimensions,
                found: list.dimensions,
            });
        }
        let start = Instant::now();
        let dimensions = self.dimensions;
        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("start transaction", e))?;
        for node in &list.nodes {
            insert_node(&tx, node)?;
        }
        for edge in &list.edges {
            let cost = edge.cost_vector(dimensions)?;
            insert_edge(&tx, &edge.from, &edge.to, &cost)?;
        }
        tx.commit().map_err(|e| map_db_err!("commit import", e))?;
        trace_time!(
            start,
            "import_edge_list",
            nodes = list.nodes.len(),
            edges = list.edges.len()
        );
        Ok(())
    }

    fn require(&self, node: &str) -> Result<()> {
        if self.contains(node)? {
            Ok(())
        } else {
            Err(ParetoError::unknown_node(node))
        }
    }
}

fn insert_node(conn: &Connection, node: &str) -> Result<bool> {
    let inserted = conn
        .execute("INSERT OR IGNORE INTO nodes (id) VALUES (?1)", params![node])
        .map_err(|e| map_db_err!("insert node", e))?;
    Ok(inserted > 0)
}

fn insert_edge(tx: &Transaction<'_>, from: &str, to: &str, cost: &CostVector) -> Result<()> {
    insert_node(tx, from)?;
    insert_node(tx, to)?;
    let cost_json = serde_json::to_string(cost)?;
    tx.execute(
        "INSERT INTO edges (source_id, target_id, cost) VALUES (?1, ?2, ?3)",
        params![from, to, cost_json],
    )
    .map_err(|e| map_db_err!("insert edge", e))?;
    Ok(())
}

impl Graph for SqliteGraph {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn neighbors(&self, node: &str) -> Result<Vec<(NodeId, CostVector)>> {
        self.require(node)?;

        let mut stmt = self
            .conn
            .prepare_cached("SELECT target_id, cost FROM edges WHERE source_id = ?1 ORDER BY id")
            .map_err(|e| map_db_err!("prepare neighbors query", e))?;

        let mut rows = stmt
            .query(params![node])
            .map_err(|e| map_db_err!("execute neighbors query", e))?;

        let mut neighbors = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| map_db_err!("read neighbor", e))?
        {
            let target: String = row
                .get(0)
                .map_err(|e| map_db_err!("get target_id", e))?;
            let cost_json: String = row.get(1).map_err(|e| map_db_err!("get cost", e))?;
            let components: Vec<f64> = serde_json::from_str(&cost_json)?;
            let cost = CostVector::with_dimensions(components, self.dimensions)?;
            neighbors.push((target, cost));
        }

        Ok(neighbors)
    }

    fn contains(&self, node: &str) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM nodes WHERE id = ?1",
                params![node],
                |r| r.get(0),
            )
            .map_err(|e| map_db_err!("look up node", e))
    }

    fn nodes(&self) -> Result<Vec<NodeId>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id FROM nodes ORDER BY rowid")
            .map_err(|e| map_db_err!("prepare nodes query", e))?;
        let ids = stmt
            .query_map([], |r| r.get(0))
            .map_err(|e| map_db_err!("execute nodes query", e))?
            .collect::<rusqlite::Result<Vec<String>>>()
            .map_err(|e| map_db_err!("read node", e))?;
        Ok(ids)
    }

    fn edge_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM edges", [], |r| r.get(0))
            .map_err(|e| map_db_err!("count edges", e))?;
        Ok(count as usize)
    }
}

impl GraphMut for SqliteGraph {
    fn add_node(&mut self, node: &str) -> Result<bool> {
        insert_node(&self.conn, node)
    }

    fn add_edge(&mut self, from: &str, to: &str, cost: CostVector) -> Result<()> {
        check_edge_cost(self.dimensions, from, to, &cost)?;
        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("start transaction", e))?;
        insert_edge(&tx, from, to, &cost)?;
        tx.commit().map_err(|e| map_db_err!("commit edge", e))?;
        Ok(())
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<usize> {
        self.require(from)?;
        self.require(to)?;
        let removed = self
            .conn
            .execute(
                "DELETE FROM edges WHERE source_id = ?1 AND target_id = ?2",
                params![from, to],
            )
            .map_err(|e| map_db_err!("delete edge", e))?;
        if removed == 0 {
            return Err(ParetoError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(removed)
    }
}
