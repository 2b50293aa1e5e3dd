// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::render::RenderFormat;

#[derive(Parser)]
#[command(
    name = "wordgraph",
    version,
    about = "Build a word adjacency graph from text and query it"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Text file the graph is built from
    #[arg(long, short, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,
    /// Settings file (defaults to ./wordgraph.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// Seed for text generation and random walks
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every edge as `from -> to [weight=N]`
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Find words linking WORD1 to WORD2
    Bridge {
        word1: String,
        word2: String,
        #[arg(long)]
        json: bool,
    },
    /// Insert bridge words into a sentence
    Generate {
        #[arg(required = true, num_args = 1.., value_name = "WORDS")]
        sentence: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Shortest weighted path; all reachable words when END is omitted
    Path {
        start: String,
        end: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// PageRank of WORD, or the top-ranked words when omitted
    Rank {
        word: Option<String>,
        #[arg(long, default_value = "10")]
        top: NonZeroUsize,
        #[arg(long)]
        json: bool,
    },
    /// Random walk until a dead end or a repeated word
    Walk {
        /// Also write the walked words to this file
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Draw the graph
    Render {
        #[arg(value_name = "FILE")]
        output: PathBuf,
        /// Output format; guessed from the extension when omitted
        #[arg(long, value_enum)]
        format: Option<RenderFormat>,
    },
    /// Interactive menu over the loaded graph
    Menu,
}
