// src/graph/graph.rs
//! The word graph and its read-only query interface.

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use super::bridge::{self, BridgeOutcome};
use super::pagerank::{self, PageRankParams};
use super::path::{self, PathOutcome, ReachOutcome};
use super::walk::{self, WalkOutcome};
use super::{builder, generate};
use crate::error::Result;
use crate::random::Chooser;

/// Source word -> (target word -> number of times target followed source).
pub type Adjacency = HashMap<String, HashMap<String, usize>>;

/// One weighted directed edge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: usize,
}

/// Directed word-adjacency graph.
///
/// Words that only ever appear last in the text have no entry of their own
/// in the adjacency map; they are still nodes; see [`WordGraph::nodes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordGraph {
    pub(crate) edges: Adjacency,
}

impl WordGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_adjacency(edges: Adjacency) -> Self {
        Self { edges }
    }

    /// Builds a graph from raw text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        builder::from_text(text)
    }

    /// Builds a graph from a byte stream.
    ///
    /// # Errors
    /// Returns error if the reader fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        builder::from_reader(reader)
    }

    /// Builds a graph from a text file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        builder::from_file(path)
    }

    /// Every node, sources and targets alike, in lexicographic order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&str> {
        self.node_set().into_iter().collect()
    }

    fn node_set(&self) -> BTreeSet<&str> {
        let mut nodes = BTreeSet::new();
        for (src, targets) in &self.edges {
            nodes.insert(src.as_str());
            nodes.extend(targets.keys().map(String::as_str));
        }
        nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_set().len()
    }

    /// Number of distinct ordered pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True if `word` is a node, either as a source or as a target.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.edges.contains_key(word) || self.edges.values().any(|t| t.contains_key(word))
    }

    /// Outgoing `(target, weight)` pairs of `word`, sorted by target.
    #[must_use]
    pub fn successors(&self, word: &str) -> Vec<(&str, usize)> {
        let mut out: Vec<(&str, usize)> = self
            .edges
            .get(word)
            .map(|t| t.iter().map(|(w, &n)| (w.as_str(), n)).collect())
            .unwrap_or_default();
        out.sort_unstable();
        out
    }

    #[must_use]
    pub fn weight(&self, from: &str, to: &str) -> Option<usize> {
        self.edges.get(from).and_then(|t| t.get(to)).copied()
    }

    /// Number of distinct outgoing edges.
    #[must_use]
    pub fn out_degree(&self, word: &str) -> usize {
        self.edges.get(word).map_or(0, HashMap::len)
    }

    /// All edges sorted by `(from, to)`.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut out: Vec<Edge> = self
            .edges
            .iter()
            .flat_map(|(from, targets)| {
                targets.iter().map(move |(to, &weight)| Edge {
                    from: from.clone(),
                    to: to.clone(),
                    weight,
                })
            })
            .collect();
        out.sort_unstable();
        out
    }

    /// Raw adjacency map, for renderers and tests.
    #[must_use]
    pub fn adjacency(&self) -> &Adjacency {
        &self.edges
    }

    /// Adds `word` as a node with no outgoing edges if it is not one yet.
    ///
    /// Test scaffolding for synthetic graphs; not meant for concurrent use.
    pub fn add_node(&mut self, word: &str) {
        if !self.contains(word) {
            self.edges.insert(word.to_string(), HashMap::new());
        }
    }

    /// Adds one observation of `from -> to`.
    ///
    /// Test scaffolding, like [`WordGraph::add_node`].
    pub fn add_edge(&mut self, from: &str, to: &str) {
        *self
            .edges
            .entry(from.to_string())
            .or_default()
            .entry(to.to_string())
            .or_default() += 1;
    }

    /// Sets the weight of `from -> to`, creating the edge if needed.
    ///
    /// Test scaffolding, like [`WordGraph::add_node`].
    pub fn set_edge_weight(&mut self, from: &str, to: &str, weight: usize) {
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), weight);
    }

    /// Words `w` with edges `word1 -> w` and `w -> word2`.
    #[must_use]
    pub fn bridge_words(&self, word1: &str, word2: &str) -> BridgeOutcome {
        bridge::query(self, word1, word2)
    }

    /// Splices one random bridge word between each adjacent pair of `sentence`.
    pub fn generate_text<C: Chooser>(&self, sentence: &str, chooser: &mut C) -> String {
        generate::generate(self, sentence, chooser)
    }

    /// Minimum-weight path from `start` to `end`.
    #[must_use]
    pub fn shortest_path(&self, start: &str, end: &str) -> PathOutcome {
        path::shortest_path(self, start, end)
    }

    /// Minimum-weight paths from `start` to every reachable node.
    #[must_use]
    pub fn shortest_paths_from(&self, start: &str) -> ReachOutcome {
        path::shortest_paths_from(self, start)
    }

    /// `PageRank` of `word`, or 0.0 if it is not a node.
    #[must_use]
    pub fn page_rank(&self, word: &str, params: &PageRankParams) -> f64 {
        pagerank::rank_of(self, word, params)
    }

    /// `PageRank` of every node.
    #[must_use]
    pub fn page_ranks(&self, params: &PageRankParams) -> HashMap<String, f64> {
        pagerank::compute(self, params)
    }

    /// Nodes sorted by descending `PageRank`.
    #[must_use]
    pub fn ranked_words(&self, params: &PageRankParams) -> Vec<(String, f64)> {
        pagerank::ranked(self, params)
    }

    /// Random walk from a random node until a dead end or a revisit.
    pub fn random_walk<C: Chooser>(&self, chooser: &mut C) -> WalkOutcome {
        walk::random_walk(self, chooser)
    }
}
