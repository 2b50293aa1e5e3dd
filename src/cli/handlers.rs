// src/cli/handlers.rs
use crate::cli::format;
use crate::config::Config;
use crate::exit::WordGraphExit;
use crate::graph::{BridgeOutcome, PathOutcome, ReachOutcome, WalkOutcome, WordGraph};
use crate::random::SeededChooser;
use crate::render::{self, text, RenderFormat};
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use std::fs;
use std::path::Path;

/// A loaded graph plus the settings and randomness used to query it.
pub struct Session {
    pub graph: WordGraph,
    pub config: Config,
    pub chooser: SeededChooser,
}

impl Session {
    /// Seeds from `seed`, then the config's `walk.seed`, then entropy.
    #[must_use]
    pub fn new(graph: WordGraph, config: Config, seed: Option<u64>) -> Self {
        let chooser = SeededChooser::new(seed.or_else(|| config.seed()));
        Self {
            graph,
            config,
            chooser,
        }
    }

    /// Reads `file` and builds its graph.
    ///
    /// # Errors
    /// Returns error if the file cannot be read.
    pub fn open(file: &Path, config: Config, seed: Option<u64>) -> Result<Self> {
        let graph = WordGraph::from_file(file)
            .with_context(|| format!("Failed to build graph from {}", file.display()))?;
        Ok(Self::new(graph, config, seed))
    }
}

#[must_use]
pub fn bridge_exit(outcome: &BridgeOutcome) -> WordGraphExit {
    match outcome {
        BridgeOutcome::UnknownWords { .. } => WordGraphExit::WordNotFound,
        BridgeOutcome::NoBridge => WordGraphExit::NoResult,
        BridgeOutcome::Found { .. } => WordGraphExit::Success,
    }
}

#[must_use]
pub fn path_exit(outcome: &PathOutcome) -> WordGraphExit {
    match outcome {
        PathOutcome::UnknownWords { .. } => WordGraphExit::WordNotFound,
        PathOutcome::NoPath => WordGraphExit::NoResult,
        PathOutcome::Found { .. } => WordGraphExit::Success,
    }
}

#[must_use]
pub fn reach_exit(outcome: &ReachOutcome) -> WordGraphExit {
    match outcome {
        ReachOutcome::UnknownWords { .. } => WordGraphExit::WordNotFound,
        ReachOutcome::Found { paths } if paths.is_empty() => WordGraphExit::NoResult,
        ReachOutcome::Found { .. } => WordGraphExit::Success,
    }
}

#[must_use]
pub fn walk_exit(outcome: &WalkOutcome) -> WordGraphExit {
    match outcome {
        WalkOutcome::EmptyGraph => WordGraphExit::EmptyGraph,
        WalkOutcome::Walked { .. } => WordGraphExit::Success,
    }
}

fn print_outcome(exit: WordGraphExit, line: &str) {
    if exit == WordGraphExit::Success {
        println!("{}", line.green());
    } else {
        println!("{}", line.yellow());
    }
}

/// Handles the show command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_show(session: &Session, json: bool) -> Result<WordGraphExit> {
    let graph = &session.graph;
    if json {
        let doc = json!({
            "nodes": graph.nodes(),
            "edges": graph.edges(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(WordGraphExit::Success);
    }

    println!(
        "{}",
        format!(
            "Directed graph: {} words, {} edges",
            graph.node_count(),
            graph.edge_count()
        )
        .bold()
    );
    for line in text::edge_lines(graph) {
        println!("  {line}");
    }
    let terminal = text::terminal_words(graph);
    if !terminal.is_empty() {
        println!("{} {}", "No outgoing edges:".dimmed(), terminal.join(", "));
    }
    Ok(WordGraphExit::Success)
}

/// Handles the bridge command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_bridge(
    session: &Session,
    word1: &str,
    word2: &str,
    json: bool,
) -> Result<WordGraphExit> {
    let (word1, word2) = (word1.to_lowercase(), word2.to_lowercase());
    let outcome = session.graph.bridge_words(&word1, &word2);
    let exit = bridge_exit(&outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(exit, &format::describe_bridge(&word1, &word2, &outcome));
    }
    Ok(exit)
}

/// Handles the generate command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_generate(session: &mut Session, sentence: &str, json: bool) -> Result<WordGraphExit> {
    let input = sentence.to_lowercase();
    if input.trim().is_empty() {
        println!("{}", "Nothing to generate from an empty sentence.".yellow());
        return Ok(WordGraphExit::InvalidInput);
    }

    let generated = session.graph.generate_text(&input, &mut session.chooser);
    if json {
        let doc = json!({ "input": input, "output": generated });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", generated.green());
    }
    Ok(WordGraphExit::Success)
}

/// Handles the path command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_path(
    session: &Session,
    start: &str,
    end: Option<&str>,
    json: bool,
) -> Result<WordGraphExit> {
    let start = start.to_lowercase();

    let Some(end) = end else {
        let outcome = session.graph.shortest_paths_from(&start);
        let exit = reach_exit(&outcome);
        if json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            for line in format::describe_reach(&start, &outcome) {
                print_outcome(exit, &line);
            }
        }
        return Ok(exit);
    };

    let end = end.to_lowercase();
    let outcome = session.graph.shortest_path(&start, &end);
    let exit = path_exit(&outcome);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(exit, &format::describe_path(&start, &end, &outcome));
    }
    Ok(exit)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_rank(
    session: &Session,
    word: Option<&str>,
    top: usize,
    json: bool,
) -> Result<WordGraphExit> {
    let params = session.config.pagerank();

    if let Some(word) = word {
        let word = word.to_lowercase();
        let exit = if session.graph.contains(&word) {
            WordGraphExit::Success
        } else {
            WordGraphExit::WordNotFound
        };
        let rank = session.graph.page_rank(&word, &params);
        if json {
            let doc = json!({ "word": word, "rank": rank });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            print_outcome(exit, &format::describe_rank(&word, rank));
        }
        return Ok(exit);
    }

    if session.graph.is_empty() {
        println!("{}", "The graph is empty.".yellow());
        return Ok(WordGraphExit::EmptyGraph);
    }

    let ranked: Vec<(String, f64)> = session
        .graph
        .ranked_words(&params)
        .into_iter()
        .take(top)
        .collect();

    if json {
        let doc: Vec<_> = ranked
            .iter()
            .map(|(word, rank)| json!({ "word": word, "rank": rank }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        for (i, (word, rank)) in ranked.iter().enumerate() {
            println!("{:>3}. {:<20} {rank:.6}", i + 1, word.cyan());
        }
    }
    Ok(WordGraphExit::Success)
}

/// Handles the walk command.
///
/// # Errors
/// Returns error if the output file cannot be written or JSON fails.
pub fn handle_walk(
    session: &mut Session,
    output: Option<&Path>,
    json: bool,
) -> Result<WordGraphExit> {
    let outcome = session.graph.random_walk(&mut session.chooser);
    let exit = walk_exit(&outcome);

    if let (Some(path), WalkOutcome::Walked { walk }) = (output, &outcome) {
        fs::write(path, format!("{}\n", walk.path.join(" ")))
            .with_context(|| format!("Failed to write walk to {}", path.display()))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(exit, &format::describe_walk(&outcome));
    }
    Ok(exit)
}

/// Handles the render command.
///
/// # Errors
/// Returns error if the output file cannot be written.
pub fn handle_render(
    session: &Session,
    output: &Path,
    format: Option<RenderFormat>,
) -> Result<WordGraphExit> {
    let format = format.unwrap_or_else(|| RenderFormat::from_path(output));
    render::write_to(&session.graph, format, &session.config.canvas(), output)
        .with_context(|| format!("Failed to render graph to {}", output.display()))?;

    println!(
        "{} {} words, {} edges -> {}",
        "[OK]".green().bold(),
        session.graph.node_count(),
        session.graph.edge_count(),
        output.display()
    );
    Ok(WordGraphExit::Success)
}
