// tests/unit_generate.rs
//! Tests for bridge-word text generation.

mod common;

use common::Scripted;
use wordgraph_core::graph::WordGraph;
use wordgraph_core::random::SeededChooser;

#[test]
fn test_inserts_single_candidates() {
    let g = WordGraph::from_text(common::TREK);
    let out = g.generate_text(
        "seek to explore new and exciting synergies",
        &mut Scripted::new(&[]),
    );
    assert_eq!(out, "seek to explore strange new life and exciting synergies");
}

#[test]
fn test_choice_follows_the_chooser() {
    // a -> {x, y} -> b
    let g = WordGraph::from_text("a x b a y b");
    assert_eq!(g.generate_text("a b", &mut Scripted::new(&[0])), "a x b");
    assert_eq!(g.generate_text("a b", &mut Scripted::new(&[1])), "a y b");
}

#[test]
fn test_chooser_is_only_asked_when_there_is_a_choice() {
    let g = WordGraph::from_text("a x b a y b c d");
    // Only the (a, b) pair has bridges; the scripted 1 goes there.
    let out = g.generate_text("c d a b", &mut Scripted::new(&[1, 0]));
    assert_eq!(out, "c d a y b");
}

#[test]
fn test_words_without_bridges_pass_through() {
    let g = WordGraph::from_text(common::TREK);
    let out = g.generate_text("Hello, brave world", &mut Scripted::new(&[]));
    assert_eq!(out, "Hello, brave world");
}

#[test]
fn test_degenerate_sentences() {
    let g = WordGraph::from_text(common::TREK);
    let mut chooser = Scripted::new(&[]);
    assert_eq!(g.generate_text("", &mut chooser), "");
    assert_eq!(g.generate_text("   ", &mut chooser), "");
    assert_eq!(g.generate_text("explore", &mut chooser), "explore");
}

#[test]
fn test_whitespace_is_collapsed() {
    let g = WordGraph::from_text(common::TREK);
    let out = g.generate_text("  explore \t new ", &mut Scripted::new(&[]));
    assert_eq!(out, "explore strange new");
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let g = WordGraph::from_text("a x b a y b a z b");
    let sentence = "a b a b a b a b";
    let first = g.generate_text(sentence, &mut SeededChooser::from_seed(42));
    let second = g.generate_text(sentence, &mut SeededChooser::from_seed(42));
    assert_eq!(first, second);
    // Four pairs (a, b) each gain a word; (b, a) pairs have none.
    assert_eq!(first.split_whitespace().count(), 12);
}
