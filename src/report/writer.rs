use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::config::Ladder;
use crate::domain::{InvalidEntry, ReportRow};
use crate::errors::ScrapeError;

const PLAYER_COLUMN: &str = "Player Name";

/// Write the ratings table: a header, then one row per player.
///
/// Each ladder contributes a current and a highest column, in request order.
/// Cells after the first carry a leading space (`A, 2000, 2100`).
pub fn write_ratings<W: Write>(
    output: W,
    rows: &[ReportRow],
    ladders: &[Ladder],
) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().from_writer(output);

    writer.write_record(spaced(header(ladders)))?;
    for row in rows {
        writer.write_record(spaced(row_cells(row)))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write `player,detail` lines for players left out of the ratings table
pub fn write_invalid<W: Write>(output: W, entries: &[InvalidEntry]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().from_writer(output);

    for entry in entries {
        writer.write_record([entry.player.as_str(), entry.detail.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn save_ratings(path: &Path, rows: &[ReportRow], ladders: &[Ladder]) -> Result<(), ScrapeError> {
    let file = create(path)?;
    write_ratings(file, rows, ladders).map_err(|e| write_failure(path, e))?;
    info!("Saved {} player ratings to {}", rows.len(), path.display());
    Ok(())
}

pub fn save_invalid(path: &Path, entries: &[InvalidEntry]) -> Result<(), ScrapeError> {
    let file = create(path)?;
    write_invalid(file, entries).map_err(|e| write_failure(path, e))?;
    info!("Saved {} invalid players to {}", entries.len(), path.display());
    Ok(())
}

// --- Helpers ---

fn header(ladders: &[Ladder]) -> Vec<String> {
    let mut cells = vec![PLAYER_COLUMN.to_string()];
    for ladder in ladders {
        cells.push(format!("Current {}", ladder.name));
        cells.push(format!("Highest {}", ladder.name));
    }
    cells
}

fn row_cells(row: &ReportRow) -> Vec<String> {
    let mut cells = vec![row.player.clone()];
    for rating in &row.ratings {
        cells.push(rating.current.to_string());
        cells.push(rating.highest.to_string());
    }
    cells
}

fn spaced(cells: Vec<String>) -> Vec<String> {
    cells
        .into_iter()
        .enumerate()
        .map(|(i, cell)| if i == 0 { cell } else { format!(" {}", cell) })
        .collect()
}

fn create(path: &Path) -> Result<File, ScrapeError> {
    File::create(path).map_err(|e| write_failure(path, csv::Error::from(e)))
}

fn write_failure(path: &Path, source: csv::Error) -> ScrapeError {
    ScrapeError::ReportWriteFailure {
        path: path.to_path_buf(),
        source,
    }
}
