//! Cost vectors and the dominance relations over them
//!
//! A [`CostVector`] is a fixed-arity tuple of finite, non-negative reals.
//! The search combines vectors only by componentwise addition, orders them
//! lexicographically for expansion, and prunes with the dominance partial
//! order implemented by the free functions [`dominates`] and
//! [`epsilon_dominates`].

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bail_cost;
use crate::error::{ParetoError, Result};

/// Smallest dimensionality accepted for a cost vector
pub const MIN_DIMENSIONS: usize = 2;

/// Default dimensionality (e.g. time, toll, scenic value)
pub const DEFAULT_DIMENSIONS: usize = 3;

/// Returns true if `a` dominates `b`: no worse in every component and
/// strictly better in at least one.
///
/// Irreflexive and antisymmetric. Slices must have equal length.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut strictly_better = false;
    for (x, y) in a.iter().zip(b) {
        if x > y {
            return false;
        }
        if x < y {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Returns true if `a` ε-dominates `b`: `aᵢ ≤ bᵢ + ε` for every component.
///
/// With `epsilon == 0.0` this is weak dominance, so equal vectors cover each
/// other.
pub fn epsilon_dominates(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(x, y)| *x <= *y + epsilon)
}

/// Immutable vector of non-negative cost components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CostVector(Vec<f64>);

impl CostVector {
    /// Create a cost vector, validating arity and component values
    pub fn new(components: Vec<f64>) -> Result<Self> {
        if components.len() < MIN_DIMENSIONS {
            bail_cost!(
                "expected at least {} components, found {}",
                MIN_DIMENSIONS,
                components.len()
            );
        }
        for (i, c) in components.iter().enumerate() {
            if !c.is_finite() {
                bail_cost!("component {} is not finite ({})", i, c);
            }
            if *c < 0.0 {
                bail_cost!("component {} is negative ({})", i, c);
            }
        }
        Ok(CostVector(components))
    }

    /// Create a cost vector that must have exactly `dimensions` components
    pub fn with_dimensions(components: Vec<f64>, dimensions: usize) -> Result<Self> {
        if components.len() != dimensions {
            bail_cost!(
                "expected {} components, found {}",
                dimensions,
                components.len()
            );
        }
        Self::new(components)
    }

    /// The all-zero vector used for the source label
    pub fn zero(dimensions: usize) -> Self {
        CostVector(vec![0.0; dimensions])
    }

    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// Componentwise sum; both vectors must share a dimensionality
    pub fn checked_add(&self, other: &CostVector) -> Result<CostVector> {
        if self.dimensions() != other.dimensions() {
            bail_cost!(
                "cannot add {}-component cost to {}-component cost",
                other.dimensions(),
                self.dimensions()
            );
        }
        Ok(CostVector(
            self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect(),
        ))
    }

    pub fn dominates(&self, other: &CostVector) -> bool {
        self.dimensions() == other.dimensions() && dominates(&self.0, &other.0)
    }

    pub fn epsilon_dominates(&self, other: &CostVector, epsilon: f64) -> bool {
        self.dimensions() == other.dimensions() && epsilon_dominates(&self.0, &other.0, epsilon)
    }

    /// Lexicographic comparison, component 0 most significant
    pub fn lex_cmp(&self, other: &CostVector) -> Ordering {
        for (a, b) in self.0.iter().zip(&other.0) {
            match a.total_cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

impl TryFrom<Vec<f64>> for CostVector {
    type Error = ParetoError;

    fn try_from(components: Vec<f64>) -> Result<Self> {
        CostVector::new(components)
    }
}

impl From<CostVector> for Vec<f64> {
    fn from(cost: CostVector) -> Vec<f64> {
        cost.0
    }
}

impl fmt::Display for CostVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
