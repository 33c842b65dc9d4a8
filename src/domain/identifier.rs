use std::fmt;

use crate::errors::ScrapeError;

/// Path segment that precedes the account id in a profile reference
const VIEW_SEGMENT: &str = "view";

/// Identifier of one account on the ratings platform
///
/// Only obtainable through [`parse_account_id`], so every value held by a
/// roster has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the account id from a profile reference.
///
/// The id is the path segment right after the first `view` segment, e.g.
/// `https://www.voobly.com/profile/view/123684015/Ratings` yields `123684015`.
/// Scheme, host, trailing slashes and trailing sub-paths are ignored.
pub fn parse_account_id(reference: &str) -> Result<AccountId, ScrapeError> {
    let invalid = || ScrapeError::InvalidReference(reference.to_string());

    let mut segments = reference.trim().split('/');
    segments
        .by_ref()
        .find(|segment| *segment == VIEW_SEGMENT)
        .ok_or_else(invalid)?;

    let candidate = segments.next().ok_or_else(invalid)?;
    if !is_decimal(candidate) {
        return Err(invalid());
    }

    Ok(AccountId(candidate.to_string()))
}

fn is_decimal(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(reference: &str) -> String {
        parse_account_id(reference).unwrap().to_string()
    }

    fn assert_invalid(reference: &str) {
        match parse_account_id(reference) {
            Err(ScrapeError::InvalidReference(input)) => assert_eq!(input, reference),
            other => panic!("expected InvalidReference for {reference:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_basic_url() {
        assert_eq!(parse_ok("https://www.voobly.com/profile/view/123684015"), "123684015");
    }

    #[test]
    fn test_parse_trailing_slash() {
        assert_eq!(parse_ok("https://www.voobly.com/profile/view/123684015/"), "123684015");
    }

    #[test]
    fn test_parse_without_scheme() {
        assert_eq!(parse_ok("www.voobly.com/profile/view/123684015"), "123684015");
    }

    #[test]
    fn test_parse_with_sub_path() {
        let url = "https://www.voobly.com/profile/view/123684015/Ratings/games/profile/123684015/131";
        assert_eq!(parse_ok(url), "123684015");
    }

    #[test]
    fn test_parse_bare_path_and_whitespace() {
        assert_eq!(parse_ok("view/42"), "42");
        assert_eq!(parse_ok("  /profile/view/0042 "), "0042");
    }

    #[test]
    fn test_missing_view_segment() {
        assert_invalid("https://www.voobly.com/profile/123684015");
        assert_invalid("https://www.voobly.com/profile/preview/123684015");
        assert_invalid("");
    }

    #[test]
    fn test_view_is_last_segment() {
        assert_invalid("https://www.voobly.com/profile/view");
        assert_invalid("https://www.voobly.com/profile/view/");
    }

    #[test]
    fn test_segment_after_view_not_an_integer() {
        assert_invalid("https://www.voobly.com/profile/view/notanint");
        assert_invalid("https://www.voobly.com/profile/view/-12");
        assert_invalid("https://www.voobly.com/profile/view/12a");
    }
}
