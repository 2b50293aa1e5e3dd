// src/graph/builder.rs
//! Graph construction: tokens in, weighted adjacency out.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::graph::{Adjacency, WordGraph};
use super::tokenize;
use crate::error::{GraphError, Result};

/// Builds the adjacency map for a token sequence.
///
/// Every consecutive pair `(a, b)` adds one to the weight of `a -> b`.
/// A single token still becomes a node, with no successors.
#[must_use]
pub fn build_edges(tokens: &[String]) -> Adjacency {
    let mut edges: Adjacency = HashMap::new();

    if let [only] = tokens {
        edges.entry(only.clone()).or_default();
        return edges;
    }

    for pair in tokens.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        *edges
            .entry(from.clone())
            .or_default()
            .entry(to.clone())
            .or_default() += 1;
    }

    edges
}

/// Builds a graph from raw text.
#[must_use]
pub fn from_text(text: &str) -> WordGraph {
    let tokens = tokenize::tokenize(text);
    let graph = WordGraph::from_adjacency(build_edges(&tokens));
    debug!(
        tokens = tokens.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built word graph"
    );
    graph
}

/// Builds a graph from any byte stream. Invalid UTF-8 is replaced rather
/// than rejected, so a damaged file still yields a (smaller) graph.
///
/// # Errors
/// Returns [`GraphError::Io`] if reading from `reader` fails.
pub fn from_reader<R: Read>(mut reader: R) -> Result<WordGraph> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(from_text(&String::from_utf8_lossy(&bytes)))
}

/// Builds a graph from a text file.
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be read.
pub fn from_file(path: &Path) -> Result<WordGraph> {
    let bytes = fs::read(path).map_err(|e| GraphError::io(e, path))?;
    Ok(from_text(&String::from_utf8_lossy(&bytes)))
}
