// src/graph/walk.rs
//! Random walks that stop at dead ends or on the first revisit.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::graph::WordGraph;
use crate::random::Chooser;

/// Why a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The last node has no successors.
    DeadEnd,
    /// The last node had already been visited; it appears twice in the path.
    Revisit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    pub path: Vec<String>,
    pub stop: StopReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WalkOutcome {
    EmptyGraph,
    Walked { walk: Walk },
}

/// Walks from a uniformly chosen node, following uniformly chosen edges.
///
/// Candidates are offered to `chooser` in lexicographic order, so a seeded
/// chooser reproduces the same walk.
pub fn random_walk<C: Chooser>(graph: &WordGraph, chooser: &mut C) -> WalkOutcome {
    let nodes = graph.nodes();
    let Some(&start) = chooser.choose(&nodes) else {
        return WalkOutcome::EmptyGraph;
    };

    let mut path = vec![start.to_string()];
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut current = start;

    let stop = loop {
        let successors = graph.successors(current);
        let Some(&(next, _)) = chooser.choose(&successors) else {
            break StopReason::DeadEnd;
        };
        path.push(next.to_string());
        if !visited.insert(next) {
            break StopReason::Revisit;
        }
        current = next;
    };

    debug!(steps = path.len(), ?stop, "random walk finished");
    WalkOutcome::Walked {
        walk: Walk { path, stop },
    }
}
