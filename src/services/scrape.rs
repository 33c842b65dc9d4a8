use std::fs;

use anyhow::Result;
use log::{error, info, warn};

use crate::config::{AppConfig, Ladder, LadderCatalog};
use crate::domain::{InvalidEntry, PlayerProgress, PlayerRoster, RatingReport};
use crate::fetchers::{RatingFetcher, VooblyScraper};
use crate::rating::RatingAggregator;
use crate::report;
use crate::roster::load_roster;

/// Login details for the ratings site
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Roster in, ratings report out
pub struct ScrapeService {
    config: AppConfig,
    catalog: LadderCatalog,
}

impl ScrapeService {
    pub fn new(config: AppConfig, catalog: LadderCatalog) -> Self {
        Self { config, catalog }
    }

    pub async fn run(&self, credentials: &Credentials, ladder_names: &[String]) -> Result<RatingReport> {
        info!("=== Starting Ratings Scrape ===\n");

        // Step 1: Resolve ladders and load the roster
        let ladders = self.catalog.resolve(ladder_names)?;
        info!("  → Ladders: {}", ladder_list(&ladders));
        let roster = load_roster(&self.config.report.roster_path)?;

        // Step 2: Sign in
        let mut scraper = VooblyScraper::new(self.config.scraper.clone())?;
        scraper.login(&credentials.username, &credentials.password).await?;

        // Step 3: Aggregate every player
        let mut aggregator = RatingAggregator::new(scraper, self.config.report.baseline_rating);
        let report = collect_ratings(&mut aggregator, &roster, ladders).await;
        info!(
            "  → Rated {} players, {} invalid\n",
            report.rows.len(),
            report.invalid.len()
        );

        // Step 4: Write reports
        self.write_reports(&report)?;

        info!("=== Scrape Complete ===");
        Ok(report)
    }

    /// Write the ratings report, plus the invalid players report when needed.
    /// An invalid players report left over from an earlier run is removed when
    /// everyone was rated. Failures on that file are logged and do not mask the
    /// ratings report outcome.
    pub fn write_reports(&self, report: &RatingReport) -> Result<()> {
        let settings = &self.config.report;
        let ratings = report::save_ratings(&settings.output_path, &report.rows, &report.ladders);

        if report.has_invalid() {
            if let Err(e) = report::save_invalid(&settings.invalid_path, &report.invalid) {
                error!("{}", e);
            }
        } else if settings.invalid_path.exists() {
            match fs::remove_file(&settings.invalid_path) {
                Ok(()) => info!("Removed stale {}", settings.invalid_path.display()),
                Err(e) => warn!(
                    "Could not remove stale {}: {}",
                    settings.invalid_path.display(),
                    e
                ),
            }
        }

        Ok(ratings?)
    }
}

/// Aggregate each player on every ladder, one player at a time.
///
/// A player whose aggregation fails lands in the invalid list instead of the
/// ratings rows; the run carries on with the next player.
pub async fn collect_ratings<F: RatingFetcher>(
    aggregator: &mut RatingAggregator<F>,
    roster: &PlayerRoster,
    ladders: Vec<Ladder>,
) -> RatingReport {
    let mut report = RatingReport::new(ladders);
    let mut progress = PlayerProgress::new(roster.len());

    for entry in roster.iter() {
        match aggregator.aggregate_player(entry, &report.ladders).await {
            Ok(row) => {
                report.push_row(row);
                progress.increment_rated();
            }
            Err(e) => {
                warn!("Skipping {}: {}", entry.name, e);
                report.push_invalid(InvalidEntry {
                    player: entry.name.clone(),
                    detail: e.invalid_detail(),
                });
                progress.increment_invalid();
            }
        }
    }

    report
}

fn ladder_list(ladders: &[Ladder]) -> String {
    ladders
        .iter()
        .map(|ladder| format!("{} ({})", ladder.name, ladder.id))
        .collect::<Vec<_>>()
        .join(", ")
}
