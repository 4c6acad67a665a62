//! Output format handling for pareto
//!
//! - human: readable frontier listing for terminal use
//! - json: stable, machine-readable report

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParetoError;
use crate::search::ParetoPath;

/// Output format for pareto commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(ParetoError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a cost as `(a, b, c)`, or `time=a toll=b ...` when criteria are named
pub fn format_cost(cost: &[f64], criteria: &[String]) -> String {
    if criteria.len() == cost.len() {
        criteria
            .iter()
            .zip(cost)
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        let parts: Vec<String> = cost.iter().map(|v| v.to_string()).collect();
        format!("({})", parts.join(", "))
    }
}

/// One human-readable line per Pareto path
pub fn format_path(path: &ParetoPath, criteria: &[String]) -> String {
    format!(
        "{}  [{} hop{}]  {}",
        format_cost(&path.cost, criteria),
        path.hops,
        if path.hops == 1 { "" } else { "s" },
        path.path.join(" -> ")
    )
}
