// tests/unit_path.rs
//! Tests for shortest weighted paths.

mod common;

use common::weighted;
use wordgraph_core::graph::{PathOutcome, ReachOutcome, ShortestPath, WordGraph};

fn found(outcome: PathOutcome) -> ShortestPath {
    match outcome {
        PathOutcome::Found { path } => path,
        other => panic!("expected a path, got {other:?}"),
    }
}

fn distance(g: &WordGraph, a: &str, b: &str) -> Option<usize> {
    match g.shortest_path(a, b) {
        PathOutcome::Found { path } => Some(path.distance),
        _ => None,
    }
}

#[test]
fn test_four_cycle() {
    let g = weighted(&[("a", "b", 1), ("b", "c", 1), ("c", "d", 1), ("d", "a", 1)]);
    let path = found(g.shortest_path("a", "c"));
    assert_eq!(path.nodes, common::strings(&["a", "b", "c"]));
    assert_eq!(path.distance, 2);

    let back = found(g.shortest_path("c", "a"));
    assert_eq!(back.nodes, common::strings(&["c", "d", "a"]));
}

#[test]
fn test_weights_beat_hop_count() {
    let g = weighted(&[("a", "b", 5), ("a", "c", 1), ("c", "b", 1)]);
    let path = found(g.shortest_path("a", "b"));
    assert_eq!(path.nodes, common::strings(&["a", "c", "b"]));
    assert_eq!(path.distance, 2);
}

#[test]
fn test_self_path_is_trivial() {
    let g = WordGraph::from_text(common::SCIENTIST);
    for node in g.nodes() {
        let path = found(g.shortest_path(node, node));
        assert_eq!(path.nodes, vec![node.to_string()]);
        assert_eq!(path.distance, 0);
    }
}

#[test]
fn test_unknown_word_differs_from_no_path() {
    let g = weighted(&[("a", "b", 1), ("c", "d", 1)]);
    assert_eq!(g.shortest_path("a", "d"), PathOutcome::NoPath);
    // b is a node even though it has no outgoing edges.
    assert_eq!(g.shortest_path("b", "a"), PathOutcome::NoPath);
    assert_eq!(
        g.shortest_path("a", "zzz"),
        PathOutcome::UnknownWords {
            missing: common::strings(&["zzz"])
        }
    );
    assert_eq!(
        g.shortest_path("zzz", "zzz"),
        PathOutcome::UnknownWords {
            missing: common::strings(&["zzz"])
        }
    );
}

#[test]
fn test_path_follows_real_edges_and_sums_weights() {
    let g = WordGraph::from_text(common::SCIENTIST);
    let path = found(g.shortest_path("scientist", "system"));
    let mut total = 0;
    for pair in path.nodes.windows(2) {
        total += g.weight(&pair[0], &pair[1]).expect("path uses an edge");
    }
    assert_eq!(total, path.distance);
    assert_eq!(path.start(), Some("scientist"));
    assert_eq!(path.end(), Some("system"));
}

#[test]
fn test_triangle_property_along_path() {
    let g = WordGraph::from_text(
        "the quick fox jumps over the lazy dog and the dog jumps over the quick cat \
         while the cat sleeps near the fox",
    );
    let nodes = g.nodes();
    for &a in &nodes {
        for &c in &nodes {
            let PathOutcome::Found { path } = g.shortest_path(a, c) else {
                continue;
            };
            for b in &path.nodes {
                let ab = distance(&g, a, b).expect("prefix is reachable");
                let bc = distance(&g, b, c).expect("suffix is reachable");
                assert!(path.distance <= ab + bc, "{a} -> {b} -> {c}");
            }
        }
    }
}

#[test]
fn test_equal_routes_break_ties_deterministically() {
    let g = weighted(&[("s", "m", 1), ("s", "n", 1), ("m", "t", 1), ("n", "t", 1)]);
    for _ in 0..5 {
        let path = found(g.shortest_path("s", "t"));
        assert_eq!(path.nodes, common::strings(&["s", "m", "t"]));
    }
}

#[test]
fn test_paths_from_single_source() {
    let g = weighted(&[("a", "b", 1), ("b", "c", 2), ("a", "c", 5), ("x", "a", 1)]);
    let ReachOutcome::Found { paths } = g.shortest_paths_from("a") else {
        panic!("a is a node");
    };
    let summary: Vec<(String, usize)> = paths
        .iter()
        .map(|p| (p.nodes.last().cloned().unwrap(), p.distance))
        .collect();
    assert_eq!(
        summary,
        vec![("b".to_string(), 1), ("c".to_string(), 3)]
    );

    assert_eq!(
        g.shortest_paths_from("c"),
        ReachOutcome::Found { paths: Vec::new() }
    );
    assert!(matches!(
        g.shortest_paths_from("nope"),
        ReachOutcome::UnknownWords { .. }
    ));
}
