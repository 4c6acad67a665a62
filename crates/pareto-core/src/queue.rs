//! Expansion queue: labels in ascending lexicographic cost order
//!
//! Equal costs pop in insertion order, which keeps expansion order
//! reproducible for identical inputs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::rc::Rc;

use serde::Serialize;

use crate::error::{ParetoError, Result};
use crate::label::Label;

/// Wrapper for BinaryHeap to use as min-heap (ordered by cost, then sequence)
#[derive(Debug, Clone)]
pub struct QueueEntry {
    pub label: Rc<Label>,
    pub seq: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label
            .cost()
            .lex_cmp(other.label.cost())
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Push/pop counters for an expansion queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub pushed: usize,
    pub popped: usize,
    /// Largest number of labels waiting at once
    pub peak_len: usize,
}

#[derive(Debug, Default)]
pub struct ExpansionQueue {
    heap: BinaryHeap<Reverse<QueueEntry>>,
    next_seq: u64,
    stats: QueueStats,
}

impl ExpansionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: Rc<Label>) {
        tracing::trace!(node = label.node(), cost = %label.cost(), "pushed");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(QueueEntry { label, seq }));
        self.stats.pushed += 1;
        self.stats.peak_len = self.stats.peak_len.max(self.heap.len());
    }

    /// Remove the lexicographically smallest label (earliest pushed on ties)
    pub fn pop(&mut self) -> Result<Rc<Label>> {
        let Reverse(entry) = self.heap.pop().ok_or(ParetoError::EmptyQueue)?;
        self.stats.popped += 1;
        tracing::trace!(node = entry.label.node(), cost = %entry.label.cost(), "popped");
        Ok(entry.label)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn stats(&self) -> QueueStats {
        self.stats
    }
}
