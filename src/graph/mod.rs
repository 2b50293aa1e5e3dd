// src/graph/mod.rs
//! Word adjacency graph and the queries run against it.

pub mod bridge;
pub mod builder;
pub mod generate;
#[allow(clippy::module_inception)]
pub mod graph;
pub mod pagerank;
pub mod path;
pub mod tokenize;
pub mod walk;

pub use bridge::BridgeOutcome;
pub use graph::{Adjacency, Edge, WordGraph};
pub use pagerank::PageRankParams;
pub use path::{PathOutcome, ReachOutcome, ShortestPath};
pub use walk::{StopReason, Walk, WalkOutcome};
