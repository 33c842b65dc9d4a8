use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::AccountId;

/// Failures that end a run or knock a single player out of the report
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("The roster file '{}' does not exist.", .0.display())]
    RosterNotFound(PathBuf),

    #[error("The roster file '{}' could not be read: {source}", .path.display())]
    RosterUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid profile reference: '{0}'")]
    InvalidReference(String),

    #[error("Login failed: {0}")]
    AuthenticationFailure(String),

    #[error("No accounts to aggregate")]
    NoAccounts,

    #[error("Account {0} does not exist")]
    InvalidAccount(AccountId),

    #[error("Failed to fetch ratings for account {account} on ladder {ladder_id}: {message}")]
    Fetch {
        account: AccountId,
        ladder_id: u32,
        message: String,
    },

    #[error("Failed to write report '{}': {source}", .path.display())]
    ReportWriteFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScrapeError {
    /// Detail string recorded next to a player in the invalid players report
    pub fn invalid_detail(&self) -> String {
        match self {
            ScrapeError::InvalidAccount(account) => account.to_string(),
            other => other.to_string(),
        }
    }
}

/// Map a csv open/read error on the roster to the matching variant
pub fn roster_error(path: &Path, source: csv::Error) -> ScrapeError {
    let missing = matches!(
        source.kind(),
        csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound
    );
    if missing {
        ScrapeError::RosterNotFound(path.to_path_buf())
    } else {
        ScrapeError::RosterUnreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
