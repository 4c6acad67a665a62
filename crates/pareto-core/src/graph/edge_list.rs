//! JSON edge-list interchange format
//!
//! ```json
//! {"dimensions": 3, "nodes": ["A"], "edges": [{"from": "A", "to": "B", "cost": [1, 2, 3]}]}
//! ```
//!
//! `nodes` is optional and only needed for isolated nodes; edge endpoints are
//! added automatically. Costs are kept as raw components until the list is
//! applied to a graph, where they are validated against its dimensionality.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cost::{CostVector, DEFAULT_DIMENSIONS};
use crate::error::Result;
use crate::graph::{Graph, GraphMut, MemoryGraph};
use crate::label::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: Vec<f64>,
}

impl Edge {
    /// Validated cost with exactly `dimensions` components
    pub fn cost_vector(&self, dimensions: usize) -> Result<CostVector> {
        CostVector::with_dimensions(self.cost.clone(), dimensions)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeList {
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeId>,

    #[serde(default)]
    pub edges: Vec<Edge>,
}

fn default_dimensions() -> usize {
    DEFAULT_DIMENSIONS
}

impl EdgeList {
    /// Load an edge list from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Snapshot any graph backend, preserving node and edge order
    pub fn from_graph(graph: &dyn Graph) -> Result<Self> {
        let nodes = graph.nodes()?;
        let mut edges = Vec::new();
        for node in &nodes {
            for (to, cost) in graph.neighbors(node)? {
                edges.push(Edge {
                    from: node.clone(),
                    to,
                    cost: cost.components().to_vec(),
                });
            }
        }
        Ok(EdgeList {
            dimensions: graph.dimensions(),
            nodes,
            edges,
        })
    }

    /// Replay the nodes and edges into a mutable backend
    pub fn apply_to(&self, graph: &mut dyn GraphMut) -> Result<()> {
        for node in &self.nodes {
            graph.add_node(node)?;
        }
        for edge in &self.edges {
            let cost = edge.cost_vector(graph.dimensions())?;
            graph.add_edge(&edge.from, &edge.to, cost)?;
        }
        Ok(())
    }

    pub fn into_graph(self) -> Result<MemoryGraph> {
        let mut graph = MemoryGraph::new(self.dimensions)?;
        self.apply_to(&mut graph)?;
        Ok(graph)
    }
}
