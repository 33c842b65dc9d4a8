use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::{debug, info};

use crate::domain::{parse_account_id, PlayerRoster};
use crate::errors::{roster_error, ScrapeError};

/// First cell of the optional header row
pub const HEADER_TOKEN: &str = "player-name";

/// Prefix used when writing accounts back out as profile links
const PROFILE_LINK_PREFIX: &str = "https://www.voobly.com/profile/view/";

/// Load the roster CSV at `path`.
///
/// Rows are `player-name, profile-link[, profile-link...]`. A leading
/// `player-name` header row is skipped. Any malformed link fails the whole load.
pub fn load_roster(path: &Path) -> Result<PlayerRoster, ScrapeError> {
    info!("Loading roster from {}", path.display());

    let reader = roster_reader()
        .from_path(path)
        .map_err(|e| roster_error(path, e))?;
    let roster = read_records(reader, path)?;

    info!("  → Loaded {} players", roster.len());
    Ok(roster)
}

/// Parse a roster from any reader, e.g. an in-memory buffer
pub fn parse_roster<R: Read>(input: R) -> Result<PlayerRoster, ScrapeError> {
    read_records(roster_reader().from_reader(input), Path::new("<input>"))
}

/// Write the roster in the same layout [`load_roster`] reads
pub fn write_roster<W: Write>(roster: &PlayerRoster, output: W) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(output);
    writer.write_record([HEADER_TOKEN, "voobly-profile-link"])?;

    for entry in roster.iter() {
        let mut record = vec![entry.name.clone()];
        record.extend(
            entry
                .accounts
                .iter()
                .map(|account| format!("{}{}", PROFILE_LINK_PREFIX, account)),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn roster_reader() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

fn read_records<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<PlayerRoster, ScrapeError> {
    let mut roster = PlayerRoster::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| roster_error(path, e))?;

        if index == 0 && is_header(&record) {
            debug!("Skipping roster header row");
            continue;
        }

        let mut cells = record.iter().filter(|cell| !cell.is_empty());
        let Some(name) = cells.next() else {
            continue;
        };

        let accounts = cells.map(parse_account_id).collect::<Result<Vec<_>, _>>()?;
        if accounts.is_empty() {
            return Err(ScrapeError::InvalidReference(String::new()));
        }

        roster.insert(name, accounts);
    }

    Ok(roster)
}

fn is_header(record: &StringRecord) -> bool {
    record.get(0) == Some(HEADER_TOKEN)
}
