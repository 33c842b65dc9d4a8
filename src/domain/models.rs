use crate::config::Ladder;
use crate::domain::AccountId;
use crate::rating::AggregatedRating;

/// Player names mapped to their accounts, in the order they were loaded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRoster {
    entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub accounts: Vec<AccountId>,
}

impl PlayerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a player. A name seen before keeps its position but takes the new accounts.
    pub fn insert(&mut self, name: impl Into<String>, accounts: Vec<AccountId>) {
        let name = name.into();
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.accounts = accounts,
            None => self.entries.push(RosterEntry { name, accounts }),
        }
    }

    pub fn accounts(&self, name: &str) -> Option<&[AccountId]> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.accounts.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line of the ratings report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub player: String,
    /// One rating per requested ladder, in request order
    pub ratings: Vec<AggregatedRating>,
}

/// A player left out of the ratings report and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    pub player: String,
    pub detail: String,
}

/// Everything a run produced, ready for the report writer
#[derive(Debug, Clone, Default)]
pub struct RatingReport {
    pub ladders: Vec<Ladder>,
    pub rows: Vec<ReportRow>,
    pub invalid: Vec<InvalidEntry>,
}

impl RatingReport {
    pub fn new(ladders: Vec<Ladder>) -> Self {
        Self {
            ladders,
            rows: Vec::new(),
            invalid: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn push_invalid(&mut self, entry: InvalidEntry) {
        self.invalid.push(entry);
    }

    pub fn has_invalid(&self) -> bool {
        !self.invalid.is_empty()
    }

    pub fn row(&self, player: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.player == player)
    }
}
