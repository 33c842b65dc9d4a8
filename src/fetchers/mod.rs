pub mod ratings_page;
#[cfg(test)]
pub mod stub;
pub mod voobly_scraper;

pub use voobly_scraper::VooblyScraper;

use crate::domain::AccountId;
use crate::errors::ScrapeError;
use crate::rating::RawRating;

/// What the platform knows about one account on one ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(RawRating),
    /// The platform has no account with this id
    AccountMissing,
}

/// Source of per-account ratings.
///
/// Zero games on a ladder is `Found` with no current rating; only an account
/// the platform does not know is `AccountMissing`.
#[allow(async_fn_in_trait)]
pub trait RatingFetcher {
    async fn fetch_rating(
        &mut self,
        account: &AccountId,
        ladder_id: u32,
    ) -> Result<FetchOutcome, ScrapeError>;
}
