//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::cost::DEFAULT_DIMENSIONS;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Top-level configuration (`pareto.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for ParetoConfig {
    fn default() -> Self {
        ParetoConfig {
            version: CONFIG_FORMAT_VERSION,
            search: SearchConfig::default(),
        }
    }
}

/// Defaults for search runs; CLI flags override these
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cost components per edge (default 3)
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,

    /// ε tolerance for frontier pruning (default 0.0 = exact)
    #[serde(default)]
    pub epsilon: f64,

    /// Optional cap on label expansions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,

    /// Display names for the cost components, e.g. ["time", "toll", "scenic"]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub criteria: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            dimensions: DEFAULT_DIMENSIONS,
            epsilon: 0.0,
            max_expansions: None,
            criteria: Vec::new(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_dimensions() -> usize {
    DEFAULT_DIMENSIONS
}
