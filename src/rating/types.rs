pub type RatingValue = i32;

/// Ratings of one account on one ladder, as the platform reports them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRating {
    /// `None` when the account has not played on the ladder
    pub current: Option<RatingValue>,
    pub highest: RatingValue,
}

impl RawRating {
    pub fn new(current: Option<RatingValue>, highest: RatingValue) -> Self {
        Self { current, highest }
    }

    pub fn played(current: RatingValue, highest: RatingValue) -> Self {
        Self::new(Some(current), highest)
    }

    pub fn unplayed(highest: RatingValue) -> Self {
        Self::new(None, highest)
    }
}

/// A player's resolved ratings on one ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatedRating {
    pub current: RatingValue,
    pub highest: RatingValue,
}

impl AggregatedRating {
    pub fn new(current: RatingValue, highest: RatingValue) -> Self {
        Self { current, highest }
    }
}
