// src/render/text.rs
use crate::graph::WordGraph;

/// One `from -> to [weight=N]` line per edge, sorted.
#[must_use]
pub fn edge_lines(graph: &WordGraph) -> Vec<String> {
    graph
        .edges()
        .into_iter()
        .map(|e| format!("{} -> {} [weight={}]", e.from, e.to, e.weight))
        .collect()
}

/// Nodes that have no outgoing edge, sorted.
#[must_use]
pub fn terminal_words(graph: &WordGraph) -> Vec<&str> {
    graph
        .nodes()
        .into_iter()
        .filter(|w| graph.out_degree(w) == 0)
        .collect()
}
