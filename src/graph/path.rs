// src/graph/path.rs
//! Dijkstra shortest paths over edge weights.
//!
//! Ties are broken deterministically: the queue pops the smallest
//! `(distance, word)` pair first and a node's predecessor is only replaced
//! by a strictly shorter route, so among equal-length routes the one whose
//! predecessor settles first wins.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use super::bridge::missing_words;
use super::graph::WordGraph;

/// A path from its first node to its last, with the summed edge weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    pub nodes: Vec<String>,
    pub distance: usize,
}

impl ShortestPath {
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    #[must_use]
    pub fn end(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }
}

/// Result of a point-to-point query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PathOutcome {
    UnknownWords { missing: Vec<String> },
    NoPath,
    Found { path: ShortestPath },
}

/// Result of a single-source query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReachOutcome {
    UnknownWords { missing: Vec<String> },
    /// Paths to every node reachable from the start, sorted by target.
    /// Empty when nothing is reachable.
    Found { paths: Vec<ShortestPath> },
}

/// Settled distances and predecessors from one source.
struct Settled<'a> {
    dist: HashMap<&'a str, usize>,
    prev: HashMap<&'a str, &'a str>,
}

impl<'a> Settled<'a> {
    fn path_to(&self, end: &'a str) -> Option<ShortestPath> {
        let distance = *self.dist.get(end)?;
        let mut nodes = vec![end.to_string()];
        let mut at = end;
        while let Some(&before) = self.prev.get(at) {
            nodes.push(before.to_string());
            at = before;
        }
        nodes.reverse();
        Some(ShortestPath { nodes, distance })
    }
}

/// Shortest path from `start` to `end`.
#[must_use]
pub fn shortest_path(graph: &WordGraph, start: &str, end: &str) -> PathOutcome {
    let missing = missing_words(graph, &[start, end]);
    if !missing.is_empty() {
        return PathOutcome::UnknownWords { missing };
    }

    if start == end {
        return PathOutcome::Found {
            path: ShortestPath {
                nodes: vec![start.to_string()],
                distance: 0,
            },
        };
    }

    match settle(graph, start).path_to(end) {
        Some(path) => PathOutcome::Found { path },
        None => PathOutcome::NoPath,
    }
}

/// Shortest paths from `start` to every other reachable node.
#[must_use]
pub fn shortest_paths_from(graph: &WordGraph, start: &str) -> ReachOutcome {
    let missing = missing_words(graph, &[start]);
    if !missing.is_empty() {
        return ReachOutcome::UnknownWords { missing };
    }

    let settled = settle(graph, start);
    let mut targets: Vec<&str> = settled
        .dist
        .keys()
        .copied()
        .filter(|&w| w != start)
        .collect();
    targets.sort_unstable();

    let paths = targets
        .into_iter()
        .filter_map(|t| settled.path_to(t))
        .collect();
    ReachOutcome::Found { paths }
}

fn settle<'a>(graph: &'a WordGraph, start: &'a str) -> Settled<'a> {
    let mut dist: HashMap<&str, usize> = HashMap::new();
    let mut prev: HashMap<&str, &str> = HashMap::new();
    let mut done: HashSet<&str> = HashSet::new();
    let mut queue = BinaryHeap::new();

    dist.insert(start, 0);
    queue.push(Reverse((0_usize, start)));

    while let Some(Reverse((cost, node))) = queue.pop() {
        if !done.insert(node) {
            continue;
        }
        let Some(targets) = graph.edges.get(node) else {
            continue;
        };
        for (next, &weight) in targets {
            let next = next.as_str();
            let alt = cost.saturating_add(weight);
            if dist.get(next).map_or(true, |&d| alt < d) {
                dist.insert(next, alt);
                prev.insert(next, node);
                queue.push(Reverse((alt, next)));
            }
        }
    }

    debug!(start, settled = done.len(), "dijkstra finished");
    Settled { dist, prev }
}
