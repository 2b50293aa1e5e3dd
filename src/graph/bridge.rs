// src/graph/bridge.rs
//! Bridge-word lookup.

use serde::Serialize;

use super::graph::WordGraph;

/// Result of a bridge-word query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BridgeOutcome {
    /// One or both words are not nodes. `missing` lists them in query order.
    UnknownWords { missing: Vec<String> },
    /// Both words exist but nothing links them.
    NoBridge,
    /// Bridge words in lexicographic order.
    Found { words: Vec<String> },
}

/// Looks up the bridge words from `word1` to `word2`.
#[must_use]
pub fn query(graph: &WordGraph, word1: &str, word2: &str) -> BridgeOutcome {
    let missing = missing_words(graph, &[word1, word2]);
    if !missing.is_empty() {
        return BridgeOutcome::UnknownWords { missing };
    }

    let words = bridges(graph, word1, word2);
    if words.is_empty() {
        BridgeOutcome::NoBridge
    } else {
        BridgeOutcome::Found { words }
    }
}

/// Sorted bridge words; empty when either word is unknown.
pub(crate) fn bridges(graph: &WordGraph, word1: &str, word2: &str) -> Vec<String> {
    let Some(firsts) = graph.edges.get(word1) else {
        return Vec::new();
    };

    let mut words: Vec<String> = firsts
        .keys()
        .filter(|mid| {
            graph
                .edges
                .get(mid.as_str())
                .is_some_and(|next| next.contains_key(word2))
        })
        .cloned()
        .collect();
    words.sort_unstable();
    words
}

/// Words from `words` that are not nodes, without duplicates.
pub(crate) fn missing_words(graph: &WordGraph, words: &[&str]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for word in words {
        if !graph.contains(word) && !missing.iter().any(|m| m == word) {
            missing.push((*word).to_string());
        }
    }
    missing
}
