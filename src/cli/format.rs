// src/cli/format.rs
//! Human-readable phrasing of query outcomes, shared by the one-shot
//! subcommands and the interactive menu.

use crate::graph::{BridgeOutcome, PathOutcome, ReachOutcome, ShortestPath, StopReason, WalkOutcome};

/// `a`, `a and b`, `a, b and c`.
#[must_use]
pub fn join_words(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

#[must_use]
pub fn describe_missing(missing: &[String]) -> String {
    let quoted: Vec<String> = missing.iter().map(|w| format!("\"{w}\"")).collect();
    format!("No {} in the graph!", quoted.join(" or "))
}

#[must_use]
pub fn describe_bridge(word1: &str, word2: &str, outcome: &BridgeOutcome) -> String {
    match outcome {
        BridgeOutcome::UnknownWords { missing } => describe_missing(missing),
        BridgeOutcome::NoBridge => format!("No bridge words from {word1} to {word2}!"),
        BridgeOutcome::Found { words } if words.len() == 1 => {
            format!("The bridge word from {word1} to {word2} is: {}.", words[0])
        }
        BridgeOutcome::Found { words } => format!(
            "The bridge words from {word1} to {word2} are: {}.",
            join_words(words)
        ),
    }
}

#[must_use]
pub fn describe_shortest(path: &ShortestPath) -> String {
    format!(
        "Shortest path: {} (length {})",
        path.nodes.join(" -> "),
        path.distance
    )
}

#[must_use]
pub fn describe_path(start: &str, end: &str, outcome: &PathOutcome) -> String {
    match outcome {
        PathOutcome::UnknownWords { missing } => describe_missing(missing),
        PathOutcome::NoPath => format!("No path from {start} to {end}."),
        PathOutcome::Found { path } => describe_shortest(path),
    }
}

/// One line per reachable target.
#[must_use]
pub fn describe_reach(start: &str, outcome: &ReachOutcome) -> Vec<String> {
    match outcome {
        ReachOutcome::UnknownWords { missing } => vec![describe_missing(missing)],
        ReachOutcome::Found { paths } if paths.is_empty() => {
            vec![format!("No word is reachable from {start}.")]
        }
        ReachOutcome::Found { paths } => paths
            .iter()
            .map(|p| format!("to {}: {}", p.end().unwrap_or_default(), describe_shortest(p)))
            .collect(),
    }
}

#[must_use]
pub fn describe_rank(word: &str, rank: f64) -> String {
    format!("PageRank of {word}: {rank:.6}")
}

#[must_use]
pub fn describe_walk(outcome: &WalkOutcome) -> String {
    match outcome {
        WalkOutcome::EmptyGraph => "The graph is empty.".to_string(),
        WalkOutcome::Walked { walk } => {
            let why = match walk.stop {
                StopReason::DeadEnd => "dead end",
                StopReason::Revisit => "revisited a word",
            };
            format!("Random walk: {} ({why})", walk.path.join(" -> "))
        }
    }
}
