//! Multi-criteria label-setting search
//!
//! Generalizes Dijkstra to vector costs: instead of settling each node once,
//! every node keeps a [`LabelSet`] frontier and may accept several labels over
//! a run. Labels leave the [`ExpansionQueue`] in lexicographic cost order;
//! because edge costs are non-negative in every component, no label derived
//! later can be lexicographically smaller than the one being expanded.
//!
//! A run moves through [`SearchPhase::Initialized`], `Running` and
//! `Terminated`. Callers can drive it one expansion at a time with
//! [`ParetoSearch::step`] or to completion with [`ParetoSearch::run`] /
//! [`pareto_search`].

mod report;

use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::bail_invalid;
use crate::error::{ParetoError, Result};
use crate::graph::Graph;
use crate::label::{Label, NodeId};
use crate::label_set::{LabelSet, OfferStats};
use crate::queue::{ExpansionQueue, QueueStats};

pub use report::{FrontierReport, ParetoPath, SearchReport, StatsReport};

/// Options controlling a single search run
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// ε tolerance for frontier pruning (0 = exact Pareto frontier)
    pub epsilon: f64,
    /// Stop after this many expansions
    pub max_expansions: Option<usize>,
    /// Checked before every pop; set to stop the run early
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SearchOptions {
    pub fn with_epsilon(epsilon: f64) -> Self {
        SearchOptions {
            epsilon,
            ..Default::default()
        }
    }
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Source label placed, nothing expanded yet
    Initialized,
    Running,
    Terminated,
}

/// Counters collected while a run executes
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Labels popped and expanded
    pub expansions: usize,
    /// Candidate labels built from edge relaxations
    pub candidates: usize,
    pub queue: QueueStats,
    pub elapsed: Duration,
}

/// A search in progress
pub struct ParetoSearch<'g> {
    graph: &'g dyn Graph,
    source: NodeId,
    opts: SearchOptions,
    frontiers: BTreeMap<NodeId, LabelSet>,
    queue: ExpansionQueue,
    phase: SearchPhase,
    stats: SearchStats,
    truncation_reason: Option<String>,
    started: Instant,
}

impl<'g> ParetoSearch<'g> {
    /// Place the zero-cost source label and enqueue it.
    ///
    /// A source the graph does not contain gets its trivial label but is not
    /// enqueued, so the run terminates on the first step.
    pub fn new(graph: &'g dyn Graph, source: &str, opts: SearchOptions) -> Result<Self> {
        if !opts.epsilon.is_finite() || opts.epsilon < 0.0 {
            bail_invalid!("epsilon", opts.epsilon);
        }

        let mut search = ParetoSearch {
            graph,
            source: source.to_string(),
            opts,
            frontiers: BTreeMap::new(),
            queue: ExpansionQueue::new(),
            phase: SearchPhase::Initialized,
            stats: SearchStats::default(),
            truncation_reason: None,
            started: Instant::now(),
        };

        let start = Rc::new(Label::source(source, graph.dimensions())?);
        search.frontier_mut(source)?.offer(Rc::clone(&start))?;

        if graph.contains(source)? {
            search.queue.push(start);
        } else {
            tracing::warn!(source, "source node not in graph; nothing to expand");
        }

        Ok(search)
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Labels waiting for expansion
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Current frontier at `node`, if any label has reached it
    pub fn frontier(&self, node: &str) -> Option<&LabelSet> {
        self.frontiers.get(node)
    }

    /// Expand one label. Returns false once the run has terminated.
    pub fn step(&mut self) -> Result<bool> {
        if self.phase == SearchPhase::Terminated {
            return Ok(false);
        }
        if self.queue.is_empty() {
            self.terminate(None);
            return Ok(false);
        }
        if let Some(reason) = self.stop_reason() {
            self.terminate(Some(reason));
            return Ok(false);
        }

        self.phase = SearchPhase::Running;
        let label = self.queue.pop()?;
        self.expand(label)?;
        Ok(true)
    }

    /// Expand until the queue drains (or a limit fires) and return the result
    pub fn run(mut self) -> Result<SearchResult> {
        while self.step()? {}
        Ok(self.into_result())
    }

    fn stop_reason(&self) -> Option<&'static str> {
        if let Some(cancel) = &self.opts.cancel {
            if cancel.load(Ordering::SeqCst) {
                return Some("cancelled");
            }
        }
        if let Some(max) = self.opts.max_expansions {
            if self.stats.expansions >= max {
                return Some("max_expansions");
            }
        }
        None
    }

    fn terminate(&mut self, reason: Option<&str>) {
        self.phase = SearchPhase::Terminated;
        self.truncation_reason = reason.map(str::to_string);
        self.stats.queue = self.queue.stats();
        self.stats.elapsed = self.started.elapsed();
        tracing::debug!(
            expansions = self.stats.expansions,
            candidates = self.stats.candidates,
            nodes = self.frontiers.len(),
            pending = self.queue.len(),
            truncation_reason = ?self.truncation_reason,
            "search terminated"
        );
    }

    fn frontier_mut(&mut self, node: &str) -> Result<&mut LabelSet> {
        if !self.frontiers.contains_key(node) {
            self.frontiers
                .insert(node.to_string(), LabelSet::new(self.opts.epsilon)?);
        }
        self.frontiers
            .get_mut(node)
            .ok_or_else(|| ParetoError::unknown_node(node))
    }

    /// Relax every outgoing edge of `label`'s node
    fn expand(&mut self, label: Rc<Label>) -> Result<()> {
        self.stats.expansions += 1;

        for (to, edge_cost) in self.graph.neighbors(label.node())? {
            let cost = label.cost().checked_add(&edge_cost)?;
            let candidate = Rc::new(Label::new(cost, to, Some(Rc::clone(&label)))?);
            self.stats.candidates += 1;

            if self
                .frontier_mut(candidate.node())?
                .offer(Rc::clone(&candidate))?
            {
                self.queue.push(candidate);
            }
        }

        Ok(())
    }

    fn into_result(self) -> SearchResult {
        SearchResult {
            source: self.source,
            dimensions: self.graph.dimensions(),
            epsilon: self.opts.epsilon,
            frontiers: self.frontiers,
            stats: self.stats,
            truncated: self.truncation_reason.is_some(),
            truncation_reason: self.truncation_reason,
        }
    }
}

/// Final frontiers of a terminated run
#[derive(Debug)]
pub struct SearchResult {
    pub source: NodeId,
    pub dimensions: usize,
    pub epsilon: f64,
    /// Frontier per reached node, ordered by node id
    pub frontiers: BTreeMap<NodeId, LabelSet>,
    pub stats: SearchStats,
    pub truncated: bool,
    pub truncation_reason: Option<String>,
}

impl SearchResult {
    pub fn frontier(&self, node: &str) -> Option<&LabelSet> {
        self.frontiers.get(node)
    }

    /// Pareto-optimal paths to `node`, sorted lexicographically by cost
    pub fn paths_to(&self, node: &str) -> Vec<ParetoPath> {
        let Some(set) = self.frontiers.get(node) else {
            return Vec::new();
        };
        let mut labels: Vec<&Rc<Label>> = set.iter().collect();
        labels.sort_by(|a, b| a.cost().lex_cmp(b.cost()));
        labels.into_iter().map(|l| ParetoPath::from_label(l)).collect()
    }

    /// Labels across every frontier
    pub fn total_labels(&self) -> usize {
        self.frontiers.values().map(LabelSet::len).sum()
    }

    /// Offer counters summed over all frontiers
    pub fn offer_stats(&self) -> OfferStats {
        let mut total = OfferStats::default();
        for set in self.frontiers.values() {
            total += set.stats();
        }
        total
    }
}

/// Run a search from `source` to completion
#[tracing::instrument(skip(graph, opts), fields(source = %source, epsilon = opts.epsilon, max_expansions = ?opts.max_expansions))]
pub fn pareto_search(graph: &dyn Graph, source: &str, opts: &SearchOptions) -> Result<SearchResult> {
    ParetoSearch::new(graph, source, opts.clone())?.run()
}
