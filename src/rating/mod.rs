pub mod aggregator;
pub mod types;

pub use aggregator::RatingAggregator;
pub use types::{AggregatedRating, RatingValue, RawRating};
