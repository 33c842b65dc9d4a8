use std::collections::{HashMap, HashSet};

use crate::domain::{parse_account_id, AccountId};
use crate::errors::ScrapeError;
use crate::fetchers::{FetchOutcome, RatingFetcher};
use crate::rating::RawRating;

pub fn account(raw: &str) -> AccountId {
    parse_account_id(&format!("https://www.voobly.com/profile/view/{raw}")).unwrap()
}

/// Canned ratings keyed by (account, ladder) that records every request
#[derive(Default)]
pub struct StubFetcher {
    ratings: HashMap<(String, u32), RawRating>,
    missing: HashSet<String>,
    failing: HashSet<String>,
    calls: Vec<(String, u32)>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rating(mut self, account: &str, ladder_id: u32, rating: RawRating) -> Self {
        self.ratings.insert((account.to_string(), ladder_id), rating);
        self
    }

    pub fn with_missing(mut self, account: &str) -> Self {
        self.missing.insert(account.to_string());
        self
    }

    pub fn with_error(mut self, account: &str) -> Self {
        self.failing.insert(account.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.clone()
    }
}

impl RatingFetcher for StubFetcher {
    async fn fetch_rating(
        &mut self,
        account: &AccountId,
        ladder_id: u32,
    ) -> Result<FetchOutcome, ScrapeError> {
        let key = account.as_str().to_string();
        self.calls.push((key.clone(), ladder_id));

        if self.missing.contains(&key) {
            return Ok(FetchOutcome::AccountMissing);
        }
        if self.failing.contains(&key) {
            return Err(ScrapeError::Fetch {
                account: account.clone(),
                ladder_id,
                message: "HTTP error: 500 Internal Server Error".to_string(),
            });
        }

        self.ratings
            .get(&(key, ladder_id))
            .copied()
            .map(FetchOutcome::Found)
            .ok_or_else(|| ScrapeError::Fetch {
                account: account.clone(),
                ladder_id,
                message: "no canned rating".to_string(),
            })
    }
}
