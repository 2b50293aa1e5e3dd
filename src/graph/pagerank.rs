// src/graph/pagerank.rs
//! `PageRank` scoring for words.
//!
//! Out-degree counts distinct successors, not summed weights. Nodes without
//! successors pass no rank on; their mass is not redistributed, so totals
//! can drift below 1.0 on graphs with dead ends.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::graph::WordGraph;

pub const DAMPING: f64 = 0.85;
pub const MAX_ITERATIONS: usize = 100;
pub const TOLERANCE: f64 = 1e-6;

/// Iteration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRankParams {
    pub damping: f64,
    pub max_iterations: usize,
    /// Stop once the summed absolute change of one iteration drops below this.
    pub tolerance: f64,
}

impl Default for PageRankParams {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            max_iterations: MAX_ITERATIONS,
            tolerance: TOLERANCE,
        }
    }
}

/// Computes `PageRank` scores for every node.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &WordGraph, params: &PageRankParams) -> HashMap<String, f64> {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return HashMap::new();
    }

    let n = nodes.len() as f64;
    let mut ranks = initialize_ranks(&nodes, n);
    let mut iterations = 0;
    let mut change = f64::INFINITY;

    for _ in 0..params.max_iterations {
        let next = iterate_once(graph, &ranks, &nodes, params.damping, n);
        change = total_change(&ranks, &next);
        ranks = next;
        iterations += 1;
        if change < params.tolerance {
            break;
        }
    }

    debug!(nodes = nodes.len(), iterations, change, "pagerank finished");
    ranks
        .into_iter()
        .map(|(word, rank)| (word.to_string(), rank))
        .collect()
}

/// Score of one word; 0.0 for words outside the graph.
#[must_use]
pub fn rank_of(graph: &WordGraph, word: &str, params: &PageRankParams) -> f64 {
    if !graph.contains(word) {
        return 0.0;
    }
    compute(graph, params).get(word).copied().unwrap_or(0.0)
}

/// All scores, highest first; equal scores fall back to word order.
#[must_use]
pub fn ranked(graph: &WordGraph, params: &PageRankParams) -> Vec<(String, f64)> {
    let mut ranked: Vec<_> = compute(graph, params).into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked
}

fn initialize_ranks<'a>(nodes: &[&'a str], n: f64) -> HashMap<&'a str, f64> {
    nodes.iter().map(|&w| (w, 1.0 / n)).collect()
}

#[allow(clippy::cast_precision_loss)]
fn iterate_once<'a>(
    graph: &WordGraph,
    ranks: &HashMap<&'a str, f64>,
    nodes: &[&'a str],
    damping: f64,
    n: f64,
) -> HashMap<&'a str, f64> {
    let base = (1.0 - damping) / n;
    let mut next: HashMap<&'a str, f64> = nodes.iter().map(|&w| (w, base)).collect();

    for (source, targets) in &graph.edges {
        if targets.is_empty() {
            continue;
        }
        let source_rank = ranks.get(source.as_str()).copied().unwrap_or(0.0);
        let share = damping * source_rank / targets.len() as f64;
        for target in targets.keys() {
            if let Some(rank) = next.get_mut(target.as_str()) {
                *rank += share;
            }
        }
    }

    next
}

fn total_change(old: &HashMap<&str, f64>, new: &HashMap<&str, f64>) -> f64 {
    new.iter()
        .map(|(word, rank)| (rank - old.get(word).copied().unwrap_or(0.0)).abs())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node_gets_all_the_base_mass() {
        let mut g = WordGraph::new();
        g.add_node("solo");
        let ranks = compute(&g, &PageRankParams::default());
        assert!((ranks["solo"] - 0.15).abs() < 1e-12);
    }

    #[test]
    fn stops_after_max_iterations() {
        let mut g = WordGraph::new();
        g.add_edge("a", "b");
        let one = PageRankParams {
            max_iterations: 1,
            ..PageRankParams::default()
        };
        let ranks = compute(&g, &one);
        // One step: a keeps only the base, b gets base + 0.85 * 0.5.
        assert!((ranks["a"] - 0.075).abs() < 1e-12);
        assert!((ranks["b"] - (0.075 + 0.425)).abs() < 1e-12);
    }
}
