// src/render/dot.rs
//! Graphviz export.

use std::fmt::Write;

use crate::graph::WordGraph;

/// Renders `graph` as a Graphviz `digraph` with weight labels.
#[must_use]
pub fn render(graph: &WordGraph) -> String {
    let mut out = String::from("digraph wordgraph {\n");
    let nodes = graph.nodes();
    for node in &nodes {
        let _ = writeln!(out, "    \"{}\";", escape(node));
    }
    for from in &nodes {
        for (to, weight) in graph.successors(from) {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [label=\"{weight}\"];",
                escape(from),
                escape(to),
            );
        }
    }
    out.push_str("}\n");
    out
}

fn escape(word: &str) -> String {
    word.replace('\\', "\\\\").replace('"', "\\\"")
}
