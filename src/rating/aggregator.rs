use log::{debug, warn};

use crate::config::Ladder;
use crate::domain::{AccountId, ReportRow, RosterEntry};
use crate::errors::ScrapeError;
use crate::fetchers::{FetchOutcome, RatingFetcher};
use crate::rating::types::{AggregatedRating, RatingValue};

/// Running maximum before any account has reported a value
const UNSEEN: RatingValue = -1;

/// Resolves a player's accounts into one rating per ladder.
///
/// The best value across accounts wins for both current and highest rating.
/// Accounts without games on a ladder only contribute their highest rating;
/// if no account has games the current rating falls back to the baseline.
pub struct RatingAggregator<F> {
    fetcher: F,
    baseline: RatingValue,
}

impl<F: RatingFetcher> RatingAggregator<F> {
    pub fn new(fetcher: F, baseline: RatingValue) -> Self {
        Self { fetcher, baseline }
    }

    /// Combine every account's ratings on one ladder.
    ///
    /// Fails with [`ScrapeError::InvalidAccount`] as soon as one account does
    /// not exist; later accounts are not fetched.
    pub async fn aggregate(
        &mut self,
        accounts: &[AccountId],
        ladder_id: u32,
    ) -> Result<AggregatedRating, ScrapeError> {
        if accounts.is_empty() {
            return Err(ScrapeError::NoAccounts);
        }

        let mut max_current = UNSEEN;
        let mut max_highest = UNSEEN;

        for account in accounts {
            let raw = match self.fetcher.fetch_rating(account, ladder_id).await? {
                FetchOutcome::Found(raw) => raw,
                FetchOutcome::AccountMissing => {
                    warn!("Account {} does not exist", account);
                    return Err(ScrapeError::InvalidAccount(account.clone()));
                }
            };
            debug!("Account {} on ladder {}: {:?}", account, ladder_id, raw);

            if let Some(current) = raw.current {
                max_current = max_current.max(current);
            }
            max_highest = max_highest.max(raw.highest);
        }

        let current = if max_current == UNSEEN {
            self.baseline
        } else {
            max_current
        };
        Ok(AggregatedRating::new(current, max_highest))
    }

    /// Aggregate one player on every requested ladder, in request order
    pub async fn aggregate_player(
        &mut self,
        entry: &RosterEntry,
        ladders: &[Ladder],
    ) -> Result<ReportRow, ScrapeError> {
        let mut ratings = Vec::with_capacity(ladders.len());
        for ladder in ladders {
            ratings.push(self.aggregate(&entry.accounts, ladder.id).await?);
        }

        Ok(ReportRow {
            player: entry.name.clone(),
            ratings,
        })
    }

    #[cfg(test)]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::stub::{account, StubFetcher};
    use crate::rating::RawRating;

    const LADDER: u32 = 5;

    fn aggregator(fetcher: StubFetcher) -> RatingAggregator<StubFetcher> {
        RatingAggregator::new(fetcher, 1600)
    }

    #[tokio::test]
    async fn test_single_account_with_games() {
        let fetcher = StubFetcher::new().with_rating("111", LADDER, RawRating::played(2000, 2100));
        let mut agg = aggregator(fetcher);

        let rating = agg.aggregate(&[account("111")], LADDER).await.unwrap();
        assert_eq!(rating, AggregatedRating::new(2000, 2100));
    }

    #[tokio::test]
    async fn test_multiple_accounts_take_element_wise_max() {
        let fetcher = StubFetcher::new()
            .with_rating("1", LADDER, RawRating::played(1900, 1950))
            .with_rating("2", LADDER, RawRating::played(1750, 2200))
            .with_rating("3", LADDER, RawRating::unplayed(1800));
        let mut agg = aggregator(fetcher);

        let rating = agg
            .aggregate(&[account("1"), account("2"), account("3")], LADDER)
            .await
            .unwrap();
        assert_eq!(rating, AggregatedRating::new(1900, 2200));
    }

    #[tokio::test]
    async fn test_unplayed_account_does_not_lower_current() {
        let fetcher = StubFetcher::new()
            .with_rating("222", LADDER, RawRating::unplayed(1800))
            .with_rating("333", LADDER, RawRating::played(1900, 1950));
        let mut agg = aggregator(fetcher);

        let rating = agg
            .aggregate(&[account("222"), account("333")], LADDER)
            .await
            .unwrap();
        assert_eq!(rating, AggregatedRating::new(1900, 1950));
    }

    #[tokio::test]
    async fn test_no_games_anywhere_uses_baseline() {
        let fetcher = StubFetcher::new()
            .with_rating("1", LADDER, RawRating::unplayed(1700))
            .with_rating("2", LADDER, RawRating::unplayed(0));
        let mut agg = aggregator(fetcher);

        let rating = agg.aggregate(&[account("1"), account("2")], LADDER).await.unwrap();
        assert_eq!(rating, AggregatedRating::new(1600, 1700));
    }

    #[tokio::test]
    async fn test_baseline_is_configurable() {
        let fetcher = StubFetcher::new().with_rating("1", LADDER, RawRating::unplayed(0));
        let mut agg = RatingAggregator::new(fetcher, 1500);

        let rating = agg.aggregate(&[account("1")], LADDER).await.unwrap();
        assert_eq!(rating, AggregatedRating::new(1500, 0));
    }

    #[tokio::test]
    async fn test_missing_account_fails_even_when_others_exist() {
        let fetcher = StubFetcher::new()
            .with_rating("1", LADDER, RawRating::played(2000, 2100))
            .with_missing("999")
            .with_rating("3", LADDER, RawRating::played(2500, 2600));
        let mut agg = aggregator(fetcher);

        let err = agg
            .aggregate(&[account("1"), account("999"), account("3")], LADDER)
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidAccount(ref id) if id.as_str() == "999"));
        // accounts after the missing one are never requested
        assert_eq!(agg.fetcher().calls(), vec![("1".to_string(), LADDER), ("999".to_string(), LADDER)]);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let fetcher = StubFetcher::new().with_error("7");
        let mut agg = aggregator(fetcher);

        let err = agg.aggregate(&[account("7")], LADDER).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_ratings_below_sentinel_fall_back_to_baseline() {
        let fetcher = StubFetcher::new().with_rating("1", LADDER, RawRating::played(-5, -20));
        let mut agg = aggregator(fetcher);

        let rating = agg.aggregate(&[account("1")], LADDER).await.unwrap();
        assert_eq!(rating, AggregatedRating::new(1600, -1));
    }

    #[tokio::test]
    async fn test_current_equal_to_sentinel_counts_as_unseen() {
        let fetcher = StubFetcher::new()
            .with_rating("1", LADDER, RawRating::played(-1, 1500))
            .with_rating("2", LADDER, RawRating::unplayed(1550));
        let mut agg = aggregator(fetcher);

        let rating = agg.aggregate(&[account("1"), account("2")], LADDER).await.unwrap();
        assert_eq!(rating, AggregatedRating::new(1600, 1550));
    }

    #[tokio::test]
    async fn test_current_of_zero_is_kept() {
        let fetcher = StubFetcher::new().with_rating("1", LADDER, RawRating::played(0, 0));
        let mut agg = aggregator(fetcher);

        let rating = agg.aggregate(&[account("1")], LADDER).await.unwrap();
        assert_eq!(rating, AggregatedRating::new(0, 0));
    }

    #[tokio::test]
    async fn test_empty_account_list_rejected() {
        let mut agg = aggregator(StubFetcher::new());
        let err = agg.aggregate(&[], LADDER).await.unwrap_err();
        assert!(matches!(err, ScrapeError::NoAccounts));
        assert!(agg.fetcher().calls().is_empty());
    }

    #[tokio::test]
    async fn test_player_row_follows_ladder_order() {
        let fetcher = StubFetcher::new()
            .with_rating("1", 131, RawRating::played(1400, 1500))
            .with_rating("1", 132, RawRating::unplayed(1650));
        let mut agg = aggregator(fetcher);
        let entry = RosterEntry {
            name: "A".to_string(),
            accounts: vec![account("1")],
        };
        let ladders = vec![Ladder::new(132, "RM - Team Games"), Ladder::new(131, "RM - 1v1")];

        let row = agg.aggregate_player(&entry, &ladders).await.unwrap();
        assert_eq!(row.player, "A");
        assert_eq!(
            row.ratings,
            vec![AggregatedRating::new(1600, 1650), AggregatedRating::new(1400, 1500)]
        );
    }
}
