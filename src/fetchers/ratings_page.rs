use anyhow::{anyhow, bail, Context, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::errors::parse_context;
use crate::fetchers::FetchOutcome;
use crate::rating::{RatingValue, RawRating};

const CURRENT_LABEL: &str = "Current Rating";
const HIGHEST_LABEL: &str = "Highest Rating";

/// Reads the rating table off a profile's ladder page
pub struct RatingsPageParser {
    cell_selector: Selector,
    number_regex: Regex,
}

impl RatingsPageParser {
    pub fn new() -> Result<Self> {
        let cell_selector =
            Selector::parse("td").map_err(|e| anyhow!("Failed to parse cell selector: {e}"))?;
        let number_regex = Self::compile_regex()?;

        Ok(Self {
            cell_selector,
            number_regex,
        })
    }

    /// Classify a ratings page.
    ///
    /// A page without either label belongs to an account that does not exist.
    /// An empty current rating cell means no games on the ladder; an empty
    /// highest rating cell reads as 0.
    pub fn parse(&self, html: &str) -> Result<FetchOutcome> {
        let document = Html::parse_document(html);
        let current = self.labelled_value(&document, CURRENT_LABEL);
        let highest = self.labelled_value(&document, HIGHEST_LABEL);

        let (current, highest) = match (current, highest) {
            (None, None) => return Ok(FetchOutcome::AccountMissing),
            (Some(current), Some(highest)) => (current, highest),
            _ => bail!("Ratings table is incomplete"),
        };

        let current = self.parse_rating(&current).context(parse_context("current rating"))?;
        let highest = self
            .parse_rating(&highest)
            .context(parse_context("highest rating"))?
            .unwrap_or(0);

        Ok(FetchOutcome::Found(RawRating::new(current, highest)))
    }

    // --- Construction Helpers ---

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^\d{1,3}(?:,\d{3})*$|^\d+$").context("Failed to compile rating regex")
    }

    // --- Extraction ---

    /// Text of the cell following the label cell, trimmed
    fn labelled_value(&self, document: &Html, label: &str) -> Option<String> {
        let label_cell = document
            .select(&self.cell_selector)
            .find(|cell| cell_text(cell) == label)?;

        let value = label_cell
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .map(|cell| cell_text(&cell))
            .unwrap_or_default();
        Some(value)
    }

    fn parse_rating(&self, text: &str) -> Result<Option<RatingValue>> {
        if text.is_empty() {
            return Ok(None);
        }
        if !self.number_regex.is_match(text) {
            bail!("'{}' is not a rating", text);
        }

        let digits = text.replace(',', "");
        let value = digits.parse::<RatingValue>()?;
        Ok(Some(value))
    }
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
