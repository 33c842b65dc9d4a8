use anyhow::Result;
use colored::Colorize;

use ladder_ratings::cli::Command;
use ladder_ratings::{handle_completions, handle_ladders, handle_scrape, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Scrape(args) => handle_scrape(args),
        Command::Ladders { json } => handle_ladders(*json),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
