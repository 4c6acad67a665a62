//! Graph backends consumed by the search
//!
//! The search depends only on the [`Graph`] trait:
//! - `MemoryGraph` keeps adjacency in memory
//! - `SqliteGraph` persists adjacency in SQLite and queries it per call
//! - `EdgeList` is the JSON interchange format for both

pub mod edge_list;
pub mod memory;
pub mod sqlite;

pub use edge_list::{Edge, EdgeList};
pub use memory::MemoryGraph;
pub use sqlite::SqliteGraph;

use crate::cost::{CostVector, MIN_DIMENSIONS};
use crate::error::Result;
use crate::label::NodeId;
use crate::{bail_cost, bail_invalid};

/// Trait for providing graph adjacency to the search
///
/// `neighbors` must be deterministic (insertion order) so that equal-cost
/// ties expand in a reproducible order.
pub trait Graph {
    /// Number of components in every edge cost
    fn dimensions(&self) -> usize;

    /// Outgoing edges of `node`; `UnknownNode` if the graph lacks it
    fn neighbors(&self, node: &str) -> Result<Vec<(NodeId, CostVector)>>;

    fn contains(&self, node: &str) -> Result<bool>;

    /// All nodes in insertion order
    fn nodes(&self) -> Result<Vec<NodeId>>;

    fn edge_count(&self) -> Result<usize>;
}

/// Mutation operations shared by both backends
pub trait GraphMut: Graph {
    /// Add a node; returns false if it already existed
    fn add_node(&mut self, node: &str) -> Result<bool>;

    /// Add an edge, creating missing endpoints. Parallel edges are allowed.
    fn add_edge(&mut self, from: &str, to: &str, cost: CostVector) -> Result<()>;

    /// Remove every edge `from -> to`, returning how many were removed
    fn remove_edge(&mut self, from: &str, to: &str) -> Result<usize>;
}

/// Validate a graph's configured dimensionality
pub(crate) fn check_dimensions(dimensions: usize) -> Result<()> {
    if dimensions < MIN_DIMENSIONS {
        bail_invalid!(
            "dimensions",
            format!("{} (minimum {})", dimensions, MIN_DIMENSIONS)
        );
    }
    Ok(())
}

/// Validate an edge cost against the graph's dimensionality
pub(crate) fn check_edge_cost(dimensions: usize, from: &str, to: &str, cost: &CostVector) -> Result<()> {
    if cost.dimensions() != dimensions {
        bail_cost!(
            "edge {} -> {} has {} components, graph expects {}",
            from,
            to,
            cost.dimensions(),
            dimensions
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests;
