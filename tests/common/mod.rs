// tests/common/mod.rs
//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use wordgraph_core::graph::WordGraph;
use wordgraph_core::random::Chooser;

/// Replays a fixed list of indices, wrapping them into range.
pub struct Scripted(VecDeque<usize>);

impl Scripted {
    pub fn new(picks: &[usize]) -> Self {
        Self(picks.iter().copied().collect())
    }
}

impl Chooser for Scripted {
    fn choose_index(&mut self, len: usize) -> usize {
        self.0.pop_front().unwrap_or(0) % len
    }
}

/// Builds a graph from `(from, to, weight)` triples.
pub fn weighted(edges: &[(&str, &str, usize)]) -> WordGraph {
    let mut g = WordGraph::new();
    for (from, to, weight) in edges {
        g.set_edge_weight(from, to, *weight);
    }
    g
}

pub fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

pub const SCIENTIST: &str =
    "the scientist carefully analyzed the data the engineer carefully designed the system";

pub const TREK: &str =
    "To explore strange new worlds, To seek out new life and new civilizations";
