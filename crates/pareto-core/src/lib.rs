//! Pareto Core Library
//!
//! Multi-criteria label-setting search: every node keeps a frontier of
//! mutually non-dominated labels, and labels are expanded in lexicographic
//! cost order until no improving candidate remains.

pub mod config;
pub mod cost;
pub mod error;
pub mod format;
pub mod generate;
pub mod graph;
pub mod label;
pub mod label_set;
pub mod logging;
pub mod queue;
pub mod search;
