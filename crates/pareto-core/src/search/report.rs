//! Serializable views of a search result

use serde::Serialize;

use crate::label::{Label, NodeId};
use crate::label_set::OfferStats;
use crate::queue::QueueStats;
use crate::search::SearchResult;

/// One Pareto-optimal path: its cumulative cost and node sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoPath {
    pub cost: Vec<f64>,
    pub hops: usize,
    pub path: Vec<NodeId>,
}

impl ParetoPath {
    pub fn from_label(label: &Label) -> Self {
        ParetoPath {
            cost: label.cost().components().to_vec(),
            hops: label.hops(),
            path: label.path(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FrontierReport {
    pub node: NodeId,
    pub paths: Vec<ParetoPath>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub expansions: usize,
    pub candidates: usize,
    pub labels: usize,
    pub nodes_reached: usize,
    pub elapsed_ms: f64,
    pub offers: OfferStats,
    pub queue: QueueStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub source: NodeId,
    pub dimensions: usize,
    pub epsilon: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub criteria: Vec<String>,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_reason: Option<String>,
    pub stats: StatsReport,
    pub frontiers: Vec<FrontierReport>,
}

impl SearchResult {
    pub fn stats_report(&self) -> StatsReport {
        StatsReport {
            expansions: self.stats.expansions,
            candidates: self.stats.candidates,
            labels: self.total_labels(),
            nodes_reached: self.frontiers.len(),
            elapsed_ms: self.stats.elapsed.as_secs_f64() * 1000.0,
            offers: self.offer_stats(),
            queue: self.stats.queue,
        }
    }

    /// Build a report covering every reached node, or only `target`
    pub fn report(&self, target: Option<&str>, criteria: &[String]) -> SearchReport {
        let frontiers = self
            .frontiers
            .keys()
            .filter(|node| target.is_none_or(|t| t == node.as_str()))
            .map(|node| FrontierReport {
                node: node.clone(),
                paths: self.paths_to(node),
            })
            .collect();

        SearchReport {
            source: self.source.clone(),
            dimensions: self.dimensions,
            epsilon: self.epsilon,
            criteria: criteria.to_vec(),
            truncated: self.truncated,
            truncation_reason: self.truncation_reason.clone(),
            stats: self.stats_report(),
            frontiers,
        }
    }
}
