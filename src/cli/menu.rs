// src/cli/menu.rs
//! Numbered interactive menu over a loaded graph.
//!
//! Reads choices and arguments line by line from any `BufRead` and writes
//! plain text, so it runs the same against a terminal or a test buffer.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::format;
use super::handlers::Session;
use crate::render::{self, text, RenderFormat};

const DEFAULT_RENDER_PATH: &str = "wordgraph.svg";

const MENU: &str = "
=== Word graph ===
1. Show directed graph
2. Query bridge words
3. Generate new text
4. Shortest path
5. PageRank
6. Random walk
7. Render graph to file
0. Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Show,
    Bridge,
    Generate,
    Path,
    Rank,
    Walk,
    Render,
    Quit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Show),
            "2" => Some(Self::Bridge),
            "3" => Some(Self::Generate),
            "4" => Some(Self::Path),
            "5" => Some(Self::Rank),
            "6" => Some(Self::Walk),
            "7" => Some(Self::Render),
            "0" | "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs the menu until the user quits or input ends.
///
/// # Errors
/// Returns error if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        writeln!(out, "{MENU}")?;
        let Some(line) = ask(input, out, "Choose an option: ")? else {
            return Ok(());
        };
        let Some(choice) = Choice::parse(&line) else {
            writeln!(out, "Invalid choice: {}", line.trim())?;
            continue;
        };
        if choice == Choice::Quit {
            writeln!(out, "Bye.")?;
            return Ok(());
        }
        if !dispatch(choice, session, input, out)? {
            return Ok(());
        }
    }
}

/// Returns `false` when input ran out mid-command.
fn dispatch<R: BufRead, W: Write>(
    choice: Choice,
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    match choice {
        Choice::Show => {
            for line in text::edge_lines(&session.graph) {
                writeln!(out, "{line}")?;
            }
        }
        Choice::Bridge => {
            let Some((w1, w2)) = ask_pair(input, out, "word1: ", "word2: ")? else {
                return Ok(false);
            };
            let outcome = session.graph.bridge_words(&w1, &w2);
            writeln!(out, "{}", format::describe_bridge(&w1, &w2, &outcome))?;
        }
        Choice::Generate => {
            let Some(sentence) = ask(input, out, "Sentence: ")? else {
                return Ok(false);
            };
            let generated = session
                .graph
                .generate_text(&sentence.to_lowercase(), &mut session.chooser);
            writeln!(out, "{generated}")?;
        }
        Choice::Path => {
            let Some((start, end)) = ask_pair(input, out, "From: ", "To (blank for all): ")? else {
                return Ok(false);
            };
            if end.is_empty() {
                let outcome = session.graph.shortest_paths_from(&start);
                for line in format::describe_reach(&start, &outcome) {
                    writeln!(out, "{line}")?;
                }
            } else {
                let outcome = session.graph.shortest_path(&start, &end);
                writeln!(out, "{}", format::describe_path(&start, &end, &outcome))?;
            }
        }
        Choice::Rank => {
            let Some(word) = ask(input, out, "Word: ")? else {
                return Ok(false);
            };
            let word = word.trim().to_lowercase();
            let rank = session.graph.page_rank(&word, &session.config.pagerank());
            writeln!(out, "{}", format::describe_rank(&word, rank))?;
        }
        Choice::Walk => {
            let outcome = session.graph.random_walk(&mut session.chooser);
            writeln!(out, "{}", format::describe_walk(&outcome))?;
        }
        Choice::Render => {
            let prompt = format!("Output file [{DEFAULT_RENDER_PATH}]: ");
            let Some(path) = ask(input, out, &prompt)? else {
                return Ok(false);
            };
            let path = match path.trim() {
                "" => PathBuf::from(DEFAULT_RENDER_PATH),
                p => PathBuf::from(p),
            };
            let fmt = RenderFormat::from_path(&path);
            render::write_to(&session.graph, fmt, &session.config.canvas(), &path)
                .with_context(|| format!("Failed to render graph to {}", path.display()))?;
            writeln!(out, "Wrote {}", path.display())?;
        }
        Choice::Quit => {}
    }
    Ok(true)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask_pair<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    first: &str,
    second: &str,
) -> Result<Option<(String, String)>> {
    let Some(a) = ask(input, out, first)? else {
        return Ok(None);
    };
    let Some(b) = ask(input, out, second)? else {
        return Ok(None);
    };
    Ok(Some((a.trim().to_lowercase(), b.trim().to_lowercase())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_quit_aliases() {
        assert_eq!(Choice::parse(" 2 "), Some(Choice::Bridge));
        assert_eq!(Choice::parse("q"), Some(Choice::Quit));
        assert_eq!(Choice::parse("9"), None);
        assert_eq!(Choice::parse(""), None);
    }
}
