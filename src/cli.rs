use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::LadderCatalog;

#[derive(Parser, Debug)]
#[command(author, version, about = "Voobly ladder ratings for a roster of players")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch every rostered player's ratings and write the report
    Scrape(ScrapeArgs),
    /// List the ladders that can be selected
    Ladders {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ScrapeArgs {
    /// Voobly account username
    pub username: String,

    /// Voobly account password
    pub password: String,

    /// Ladder to report on, repeatable (defaults to "RM - 1v1" and "RM - Team Games")
    #[arg(short, long = "ladder", value_parser = ladder_parser())]
    pub ladders: Vec<String>,

    /// Roster CSV (defaults to players.csv)
    #[arg(long)]
    pub players: Option<PathBuf>,

    /// Ratings report destination (defaults to ratings.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Invalid players report destination (defaults to invalid_players.csv)
    #[arg(long)]
    pub invalid: Option<PathBuf>,
}

fn ladder_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(LadderCatalog::voobly().names())
}
