// src/graph/generate.rs
//! Text generation by bridge-word insertion.

use super::bridge;
use super::graph::WordGraph;
use super::tokenize;
use crate::random::Chooser;

/// Rewrites `sentence`, inserting one randomly chosen bridge word between
/// every adjacent pair that has at least one.
///
/// Tokens are compared against the graph verbatim; callers wanting
/// case-insensitive matching lower-case the sentence first.
pub fn generate<C: Chooser>(graph: &WordGraph, sentence: &str, chooser: &mut C) -> String {
    let words = tokenize::sentence_words(sentence);
    let mut out: Vec<String> = Vec::with_capacity(words.len() * 2);

    for (i, word) in words.iter().enumerate() {
        out.push((*word).to_string());

        let Some(next) = words.get(i + 1) else {
            continue;
        };
        let candidates = bridge::bridges(graph, word, next);
        if let Some(bridge) = chooser.choose(&candidates) {
            out.push(bridge.clone());
        }
    }

    out.join(" ")
}
