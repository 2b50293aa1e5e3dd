//! Word adjacency graphs built from free text.
//!
//! ```
//! use wordgraph_core::graph::{BridgeOutcome, WordGraph};
//!
//! let graph = WordGraph::from_text("to seek out new life and new civilizations");
//! assert_eq!(
//!     graph.bridge_words("seek", "new"),
//!     BridgeOutcome::Found { words: vec!["out".to_string()] }
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod random;
pub mod render;
