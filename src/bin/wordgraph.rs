use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use wordgraph_core::cli::{self, Cli};
use wordgraph_core::exit::WordGraphExit;

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> WordGraphExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = if cli.command.is_some() {
        cli::dispatch::execute(cli)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(WordGraphExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            WordGraphExit::Error
        }
    }
}
