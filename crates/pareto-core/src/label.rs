//! Labels: cumulative costs reaching a node, linked to their predecessor
//!
//! Predecessor links form an append-only DAG of immutable labels shared
//! through `Rc`. A label evicted from its node's frontier stays alive for as
//! long as some descendant still points at it.

use std::rc::Rc;

use crate::bail_cost;
use crate::cost::CostVector;
use crate::error::Result;

/// Node identifier used throughout the search
pub type NodeId = String;

/// One cumulative cost vector reaching one node
#[derive(Debug)]
pub struct Label {
    cost: CostVector,
    node: NodeId,
    predecessor: Option<Rc<Label>>,
}

impl Label {
    /// Create a label, checking that its cost matches the predecessor's arity
    pub fn new(
        cost: CostVector,
        node: impl Into<NodeId>,
        predecessor: Option<Rc<Label>>,
    ) -> Result<Self> {
        if let Some(pred) = &predecessor {
            if pred.cost.dimensions() != cost.dimensions() {
                bail_cost!(
                    "expected {} components to extend predecessor at {}, found {}",
                    pred.cost.dimensions(),
                    pred.node,
                    cost.dimensions()
                );
            }
        }
        Ok(Label {
            cost,
            node: node.into(),
            predecessor,
        })
    }

    /// Label at the source: zero cost, no predecessor
    pub fn source(node: impl Into<NodeId>, dimensions: usize) -> Result<Self> {
        let cost = CostVector::new(vec![0.0; dimensions])?;
        Self::new(cost, node, None)
    }

    pub fn cost(&self) -> &CostVector {
        &self.cost
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn predecessor(&self) -> Option<&Rc<Label>> {
        self.predecessor.as_ref()
    }

    pub fn dominates(&self, other: &Label) -> bool {
        self.cost.dominates(&other.cost)
    }

    pub fn epsilon_dominates(&self, other: &Label, epsilon: f64) -> bool {
        self.cost.epsilon_dominates(&other.cost, epsilon)
    }

    /// Iterate from this label back to the source
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            current: Some(self),
        }
    }

    /// Node sequence from the source to this label's node
    pub fn path(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.ancestors().map(|l| l.node.clone()).collect();
        nodes.reverse();
        nodes
    }

    /// Number of edges on this label's path
    pub fn hops(&self) -> usize {
        self.ancestors().count() - 1
    }
}

impl Drop for Label {
    fn drop(&mut self) {
        // Unlink uniquely owned ancestors one at a time so long chains
        // don't recurse through Rc drops.
        let mut next = self.predecessor.take();
        while let Some(pred) = next {
            match Rc::try_unwrap(pred) {
                Ok(mut label) => next = label.predecessor.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a label and its predecessors
pub struct Ancestors<'a> {
    current: Option<&'a Label>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        let label = self.current?;
        self.current = label.predecessor.as_deref();
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParetoError;

    fn cost(components: &[f64]) -> CostVector {
        CostVector::new(components.to_vec()).unwrap()
    }

    #[test]
    fn test_source_label() {
        let label = Label::source("A", 3).unwrap();
        assert_eq!(label.node(), "A");
        assert_eq!(label.cost().components(), &[0.0, 0.0, 0.0]);
        assert!(label.predecessor().is_none());
        assert_eq!(label.path(), vec!["A".to_string()]);
        assert_eq!(label.hops(), 0);
    }

    #[test]
    fn test_source_label_rejects_single_dimension() {
        assert!(matches!(
            Label::source("A", 1),
            Err(ParetoError::InvalidCost { .. })
        ));
    }

    #[test]
    fn test_predecessor_dimension_must_match() {
        let source = Rc::new(Label::source("A", 3).unwrap());
        let result = Label::new(cost(&[1.0, 1.0]), "B", Some(source));
        assert!(matches!(result, Err(ParetoError::InvalidCost { .. })));
    }

    #[test]
    fn test_path_walks_predecessors() {
        let a = Rc::new(Label::source("A", 3).unwrap());
        let b = Rc::new(Label::new(cost(&[1.0, 1.0, 1.0]), "B", Some(a)).unwrap());
        let c = Label::new(cost(&[2.0, 2.0, 2.0]), "C", Some(Rc::clone(&b))).unwrap();

        assert_eq!(c.path(), vec!["A", "B", "C"]);
        assert_eq!(c.hops(), 2);
        assert_eq!(c.predecessor().map(|p| p.node()), Some("B"));
    }

    #[test]
    fn test_label_dominance() {
        let a = Label::new(cost(&[1.0, 2.0, 3.0]), "X", None).unwrap();
        let b = Label::new(cost(&[1.0, 2.0, 4.0]), "X", None).unwrap();
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
        assert!(!a.dominates(&a));
        assert!(b.epsilon_dominates(&a, 1.0));
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let mut label = Rc::new(Label::source("N0", 2).unwrap());
        for i in 1..200_000 {
            let next = Label::new(
                cost(&[i as f64, 0.0]),
                format!("N{}", i),
                Some(Rc::clone(&label)),
            )
            .unwrap();
            label = Rc::new(next);
        }
        assert_eq!(label.hops(), 199_999);
        drop(label);
    }
}
