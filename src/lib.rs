pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod rate_limiter;
pub mod rating;
pub mod report;
pub mod roster;
pub mod services;

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;

use crate::cli::{Command, ScrapeArgs};
use crate::config::{AppConfig, LadderCatalog};
use crate::services::{Credentials, ScrapeService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_scrape(args: &ScrapeArgs) -> Result<()> {
    let config = build_config(args);
    let invalid_path = config.report.invalid_path.clone();
    let output_path = config.report.output_path.clone();
    let credentials = Credentials {
        username: args.username.clone(),
        password: args.password.clone(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(async {
        let service = ScrapeService::new(config, LadderCatalog::voobly());
        service.run(&credentials, &args.ladders).await
    })?;

    println!(
        "{} {} players written to {}",
        "Done:".green().bold(),
        report.rows.len(),
        output_path.display()
    );
    if report.has_invalid() {
        println!(
            "{} {} players could not be rated, see {}",
            "Warning:".yellow().bold(),
            report.invalid.len(),
            invalid_path.display()
        );
    }
    Ok(())
}

pub fn handle_ladders(json: bool) -> Result<()> {
    let catalog = LadderCatalog::voobly();

    if json {
        let ladders: Vec<_> = catalog.iter().collect();
        let text = serde_json::to_string_pretty(&ladders).context("Failed to serialize ladders")?;
        println!("{}", text);
        return Ok(());
    }

    for ladder in catalog.iter() {
        println!("{:>5}  {}", ladder.id, ladder.name);
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

/// Defaults overridden by whatever was given on the command line
fn build_config(args: &ScrapeArgs) -> AppConfig {
    let mut config = AppConfig::new();
    if let Some(path) = &args.players {
        config.report.roster_path = path.clone();
    }
    if let Some(path) = &args.output {
        config.report.output_path = path.clone();
    }
    if let Some(path) = &args.invalid {
        config.report.invalid_path = path.clone();
    }
    config
}
