//! Per-node Pareto frontier maintenance
//!
//! A [`LabelSet`] keeps the labels reaching one node that no other label in
//! the set covers. With `epsilon == 0` a candidate is rejected when an
//! existing label dominates or equals it; with `epsilon > 0` the relaxed
//! `aᵢ ≤ bᵢ + ε` test is used in both directions, trading optimality for a
//! smaller frontier.

use std::rc::Rc;

use serde::Serialize;

use crate::bail_invalid;
use crate::error::{ParetoError, Result};
use crate::label::Label;

/// Counters describing how offers to a label set were resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OfferStats {
    /// Candidates offered
    pub attempted: usize,
    /// Candidates accepted into the frontier
    pub kept: usize,
    /// Candidates rejected on arrival
    pub pruned: usize,
    /// Previously accepted labels evicted by a later candidate
    pub removed: usize,
}

impl std::ops::AddAssign for OfferStats {
    fn add_assign(&mut self, other: Self) {
        self.attempted += other.attempted;
        self.kept += other.kept;
        self.pruned += other.pruned;
        self.removed += other.removed;
    }
}

/// The current frontier of non-dominated labels at one node
#[derive(Debug, Default)]
pub struct LabelSet {
    labels: Vec<Rc<Label>>,
    epsilon: f64,
    dimensions: Option<usize>,
    stats: OfferStats,
}

impl LabelSet {
    /// Create an empty set with the given ε tolerance (0 = exact dominance)
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            bail_invalid!("epsilon", epsilon);
        }
        Ok(LabelSet {
            epsilon,
            ..Default::default()
        })
    }

    /// Offer a candidate label; returns whether it joined the frontier.
    ///
    /// Rejection leaves the set untouched. On acceptance every label the
    /// candidate covers is evicted before the candidate is appended.
    pub fn offer(&mut self, candidate: Rc<Label>) -> Result<bool> {
        let found = candidate.cost().dimensions();
        if let Some(expected) = self.dimensions {
            if expected != found {
                return Err(ParetoError::DimensionMismatch { expected, found });
            }
        }

        self.stats.attempted += 1;

        if let Some(existing) = self
            .labels
            .iter()
            .find(|existing| existing.epsilon_dominates(&candidate, self.epsilon))
        {
            self.stats.pruned += 1;
            tracing::debug!(
                node = candidate.node(),
                cost = %candidate.cost(),
                by = %existing.cost(),
                "pruned by dominance"
            );
            return Ok(false);
        }

        let before = self.labels.len();
        let epsilon = self.epsilon;
        self.labels
            .retain(|existing| !candidate.epsilon_dominates(existing, epsilon));
        let removed = before - self.labels.len();
        if removed > 0 {
            self.stats.removed += removed;
            tracing::debug!(
                node = candidate.node(),
                cost = %candidate.cost(),
                removed,
                "removed dominated labels"
            );
        }

        self.dimensions = Some(found);
        self.labels.push(candidate);
        self.stats.kept += 1;
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<Label>> {
        self.labels.iter()
    }

    /// Frontier labels in acceptance order
    pub fn labels(&self) -> &[Rc<Label>] {
        &self.labels
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Dimensionality established by the first accepted label
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    pub fn stats(&self) -> OfferStats {
        self.stats
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Rc<Label>;
    type IntoIter = std::slice::Iter<'a, Rc<Label>>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}
