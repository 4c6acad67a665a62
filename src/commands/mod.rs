//! CLI commands for pareto

pub mod demo;
pub mod dispatch;
pub mod edge;
pub mod generate;
pub mod helpers;
pub mod search;
