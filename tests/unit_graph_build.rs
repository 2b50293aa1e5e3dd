// tests/unit_graph_build.rs
//! Tests for word graph construction.

mod common;

use std::collections::HashSet;
use std::io::{self, Read, Write};
use wordgraph_core::error::GraphError;
use wordgraph_core::graph::tokenize::tokenize;
use wordgraph_core::graph::WordGraph;

#[test]
fn test_edges_follow_adjacent_words() {
    let g = WordGraph::from_text(common::SCIENTIST);
    assert_eq!(g.weight("the", "scientist"), Some(1));
    assert_eq!(g.weight("carefully", "analyzed"), Some(1));
    assert_eq!(g.weight("scientist", "the"), None);
    assert_eq!(g.edge_count(), 11);
}

#[test]
fn test_repeated_pairs_accumulate_weight() {
    let g = WordGraph::from_text("new life new life new");
    assert_eq!(g.weight("new", "life"), Some(2));
    assert_eq!(g.weight("life", "new"), Some(2));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn test_node_set_includes_terminal_words() {
    let g = WordGraph::from_text(common::SCIENTIST);
    assert!(g.contains("system"));
    assert!(!g.adjacency().contains_key("system"));
    assert_eq!(g.out_degree("system"), 0);
    assert_eq!(
        g.nodes(),
        vec!["analyzed", "carefully", "data", "designed", "engineer", "scientist", "system", "the"]
    );
}

#[test]
fn test_case_and_punctuation_are_normalized() {
    let g = WordGraph::from_text(common::TREK);
    assert!(g.contains("to"));
    assert!(!g.contains("To"));
    assert_eq!(g.weight("worlds", "to"), Some(1));
    assert_eq!(g.weight("to", "explore"), Some(1));
}

#[test]
fn test_every_node_is_an_input_token() {
    for text in [
        common::SCIENTIST,
        common::TREK,
        "A-B c.d, e!! 12 f\n\ng",
        "",
        "   ",
        "solo",
    ] {
        let tokens: HashSet<String> = tokenize(text).into_iter().collect();
        let g = WordGraph::from_text(text);
        for node in g.nodes() {
            assert!(tokens.contains(node), "{node:?} is not a token of {text:?}");
        }
    }
}

#[test]
fn test_degenerate_inputs() {
    let empty = WordGraph::from_text("");
    assert!(empty.is_empty());
    assert_eq!(empty.node_count(), 0);

    let single = WordGraph::from_text("  Hello!  ");
    assert_eq!(single.nodes(), vec!["hello"]);
    assert_eq!(single.edge_count(), 0);
}

#[test]
fn test_successors_are_sorted() {
    let g = WordGraph::from_text(common::SCIENTIST);
    assert_eq!(
        g.successors("the"),
        vec![("data", 1), ("engineer", 1), ("scientist", 1), ("system", 1)]
    );
    assert!(g.successors("unknown").is_empty());
}

#[test]
fn test_edges_listing_is_sorted() {
    let g = WordGraph::from_text("b a b c");
    let listed: Vec<(String, String, usize)> = g
        .edges()
        .into_iter()
        .map(|e| (e.from, e.to, e.weight))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("a".to_string(), "b".to_string(), 1),
            ("b".to_string(), "a".to_string(), 1),
            ("b".to_string(), "c".to_string(), 1),
        ]
    );
}

#[test]
fn test_from_file_joins_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first line ends").unwrap();
    writeln!(file, "second line").unwrap();
    let g = WordGraph::from_file(file.path()).unwrap();
    assert_eq!(g.weight("ends", "second"), Some(1));
}

#[test]
fn test_from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WordGraph::from_file(&dir.path().join("nope.txt")).unwrap_err();
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_from_reader_tolerates_invalid_utf8() {
    let bytes: &[u8] = b"good \xff\xfe words";
    let g = WordGraph::from_reader(bytes).unwrap();
    assert_eq!(g.weight("good", "words"), Some(1));
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
    }
}

#[test]
fn test_from_reader_propagates_read_errors() {
    let err = WordGraph::from_reader(Broken).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
    assert!(err.to_string().contains("broken pipe"));
}

#[test]
fn test_test_support_mutators() {
    let mut g = WordGraph::new();
    g.add_node("lonely");
    g.add_edge("a", "b");
    g.add_edge("a", "b");
    g.set_edge_weight("b", "c", 7);
    assert!(g.contains("lonely"));
    assert_eq!(g.weight("a", "b"), Some(2));
    assert_eq!(g.weight("b", "c"), Some(7));
    assert_eq!(g.node_count(), 4);

    // Adding an existing target as a node must not disturb it.
    g.add_node("c");
    assert!(!g.adjacency().contains_key("c"));
}
