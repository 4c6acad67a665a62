//! Synthetic graph generators for demos and smoke tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bail_invalid;
use crate::cost::CostVector;
use crate::error::Result;
use crate::graph::{GraphMut, MemoryGraph};

pub fn node_name(i: usize) -> String {
    format!("N{}", i)
}

/// Directed chain `N0 -> N1 -> ... -> N{n-1}` with 3-component costs
/// `(i mod 5 + 1, 2i mod 7 + 1, 3i mod 11 + 1)` on edge `i`.
pub fn chain(nodes: usize) -> Result<MemoryGraph> {
    let mut graph = MemoryGraph::new(3)?;
    if nodes == 0 {
        return Ok(graph);
    }
    graph.add_node(&node_name(0))?;
    for i in 0..nodes.saturating_sub(1) {
        let cost = CostVector::new(vec![
            (i % 5 + 1) as f64,
            ((i * 2) % 7 + 1) as f64,
            ((i * 3) % 11 + 1) as f64,
        ])?;
        graph.add_edge(&node_name(i), &node_name(i + 1), cost)?;
    }
    Ok(graph)
}

/// Random digraph: every node gets `degree` outgoing edges to uniformly
/// chosen targets, with components drawn from `[0, 1)`. Same seed, same graph.
pub fn random(nodes: usize, degree: usize, dimensions: usize, seed: u64) -> Result<MemoryGraph> {
    if nodes == 0 {
        bail_invalid!("node count", nodes);
    }
    let mut graph = MemoryGraph::new(dimensions)?;
    for i in 0..nodes {
        graph.add_node(&node_name(i))?;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for u in 0..nodes {
        for _ in 0..degree {
            let v = rng.gen_range(0..nodes);
            let components: Vec<f64> = (0..dimensions).map(|_| rng.gen::<f64>()).collect();
            graph.add_edge(&node_name(u), &node_name(v), CostVector::new(components)?)?;
        }
    }
    Ok(graph)
}
