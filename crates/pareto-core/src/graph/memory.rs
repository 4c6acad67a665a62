use std::collections::HashMap;

use crate::cost::CostVector;
use crate::error::{ParetoError, Result};
use crate::graph::{check_dimensions, check_edge_cost, Graph, GraphMut};
use crate::label::NodeId;

/// Adjacency held fully in memory
#[derive(Debug, Clone)]
pub struct MemoryGraph {
    dimensions: usize,
    order: Vec<NodeId>,
    adjacency: HashMap<NodeId, Vec<(NodeId, CostVector)>>,
}

impl MemoryGraph {
    pub fn new(dimensions: usize) -> Result<Self> {
        check_dimensions(dimensions)?;
        Ok(MemoryGraph {
            dimensions,
            order: Vec::new(),
            adjacency: HashMap::new(),
        })
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    fn require(&self, node: &str) -> Result<&Vec<(NodeId, CostVector)>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| ParetoError::unknown_node(node))
    }
}

impl Graph for MemoryGraph {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn neighbors(&self, node: &str) -> Result<Vec<(NodeId, CostVector)>> {
        Ok(self.require(node)?.clone())
    }

    fn contains(&self, node: &str) -> Result<bool> {
        Ok(self.adjacency.contains_key(node))
    }

    fn nodes(&self) -> Result<Vec<NodeId>> {
        Ok(self.order.clone())
    }

    fn edge_count(&self) -> Result<usize> {
        Ok(self.adjacency.values().map(Vec::len).sum())
    }
}

impl GraphMut for MemoryGraph {
    fn add_node(&mut self, node: &str) -> Result<bool> {
        if self.adjacency.contains_key(node) {
            return Ok(false);
        }
        self.adjacency.insert(node.to_string(), Vec::new());
        self.order.push(node.to_string());
        Ok(true)
    }

    fn add_edge(&mut self, from: &str, to: &str, cost: CostVector) -> Result<()> {
        check_edge_cost(self.dimensions, from, to, &cost)?;
        self.add_node(from)?;
        self.add_node(to)?;
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push((to.to_string(), cost));
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<usize> {
        self.require(to)?;
        let edges = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| ParetoError::unknown_node(from))?;
        let before = edges.len();
        edges.retain(|(dst, _)| dst != to);
        let removed = before - edges.len();
        if removed == 0 {
            return Err(ParetoError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(removed)
    }
}
