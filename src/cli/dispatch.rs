//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Cli, Commands};
use super::handlers::{self, Session};
use super::menu;
use crate::config::Config;
use crate::exit::WordGraphExit;
use anyhow::{anyhow, Context, Result};

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if configuration or input loading fails, or a handler fails.
pub fn execute(cli: Cli) -> Result<WordGraphExit> {
    let Some(command) = cli.command else {
        return Err(anyhow!("Internal error: no command to execute"));
    };

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.no_color || !config.color() {
        colored::control::set_override(false);
    }

    let file = cli
        .file
        .ok_or_else(|| anyhow!("No input text given; pass --file <FILE>"))?;
    let mut session = Session::open(&file, config, cli.seed)?;

    match command {
        Commands::Show { .. } | Commands::Render { .. } => handle_drawing(&session, &command),
        Commands::Bridge { .. } | Commands::Path { .. } | Commands::Rank { .. } => {
            handle_queries(&session, &command)
        }
        Commands::Generate { .. } | Commands::Walk { .. } => handle_random(&mut session, &command),
        Commands::Menu => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            menu::run(&mut session, &mut input, &mut output)?;
            Ok(WordGraphExit::Success)
        }
    }
}

fn handle_drawing(session: &Session, command: &Commands) -> Result<WordGraphExit> {
    match command {
        Commands::Show { json } => handlers::handle_show(session, *json),
        Commands::Render { output, format } => handlers::handle_render(session, output, *format),
        _ => Err(anyhow!("Internal error: Invalid drawing command")),
    }
}

fn handle_queries(session: &Session, command: &Commands) -> Result<WordGraphExit> {
    match command {
        Commands::Bridge { word1, word2, json } => {
            handlers::handle_bridge(session, word1, word2, *json)
        }
        Commands::Path { start, end, json } => {
            handlers::handle_path(session, start, end.as_deref(), *json)
        }
        Commands::Rank { word, top, json } => {
            handlers::handle_rank(session, word.as_deref(), top.get(), *json)
        }
        _ => Err(anyhow!("Internal error: Invalid query command")),
    }
}

fn handle_random(session: &mut Session, command: &Commands) -> Result<WordGraphExit> {
    match command {
        Commands::Generate { sentence, json } => {
            handlers::handle_generate(session, &sentence.join(" "), *json)
        }
        Commands::Walk { output, json } => handlers::handle_walk(session, output.as_deref(), *json),
        _ => Err(anyhow!("Internal error: Invalid random command")),
    }
}
