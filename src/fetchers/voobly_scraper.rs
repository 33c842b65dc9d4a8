use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use reqwest::StatusCode;
use scraper::{Html, Selector};

use crate::config::ScraperSettings;
use crate::domain::AccountId;
use crate::errors::{fetch_context, ScrapeError};
use crate::fetchers::ratings_page::RatingsPageParser;
use crate::fetchers::{FetchOutcome, RatingFetcher};
use crate::http::RateLimitedClient;

/// Logged-in session on Voobly that reads ladder ratings off profile pages
pub struct VooblyScraper {
    client: RateLimitedClient,
    settings: ScraperSettings,
    parser: RatingsPageParser,
}

impl VooblyScraper {
    pub fn new(settings: ScraperSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        let parser = RatingsPageParser::new()?;

        Ok(Self {
            client,
            settings,
            parser,
        })
    }

    /// Sign in; ratings pages are only visible to members.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ScrapeError> {
        info!("Logging in to {} as {}", self.settings.base_url, username);

        let html = self
            .submit_credentials(username, password)
            .await
            .map_err(|e| ScrapeError::AuthenticationFailure(format!("{e:#}")))?;

        if !is_logged_in(&html) {
            return Err(ScrapeError::AuthenticationFailure(
                "the site rejected the username or password".to_string(),
            ));
        }

        info!("  → Logged in");
        Ok(())
    }

    // --- Login ---

    async fn submit_credentials(&mut self, username: &str, password: &str) -> Result<String> {
        let login_url = self.settings.login_url();
        let auth_url = self.settings.login_auth_url();

        // the login page hands out the session cookie the auth form expects
        self.client
            .get(&login_url)
            .await
            .with_context(|| fetch_context(&login_url))?;

        let form = [("username", username), ("password", password)];
        let response = self
            .client
            .post_form(&auth_url, &auth_url, &form)
            .await
            .with_context(|| fetch_context(&auth_url))?;

        Self::check_response_status(&response)?;
        response.text().await.context("Failed to read login response")
    }

    // --- Ratings ---

    async fn fetch_ratings_page(&mut self, url: &str) -> Result<Option<String>> {
        let response = self.client.get(url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::check_response_status(&response)?;

        let text = response.text().await.context("Failed to extract HTML text")?;
        Ok(Some(text))
    }

    fn check_response_status(response: &reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }
        Ok(())
    }
}

impl RatingFetcher for VooblyScraper {
    async fn fetch_rating(
        &mut self,
        account: &AccountId,
        ladder_id: u32,
    ) -> Result<FetchOutcome, ScrapeError> {
        let url = self.settings.ratings_url(account.as_str(), ladder_id);
        debug!("Fetching {}", url);

        let fetch_error = |e: anyhow::Error| ScrapeError::Fetch {
            account: account.clone(),
            ladder_id,
            message: format!("{e:#}"),
        };

        let Some(html) = self.fetch_ratings_page(&url).await.map_err(fetch_error)? else {
            return Ok(FetchOutcome::AccountMissing);
        };
        self.parser.parse(&html).map_err(fetch_error)
    }
}

/// A signed-in page links to the logout action
pub fn is_logged_in(html: &str) -> bool {
    let document = Html::parse_document(html);
    match logout_selector() {
        Ok(selector) => document.select(&selector).next().is_some(),
        Err(_) => false,
    }
}

fn logout_selector() -> Result<Selector> {
    Selector::parse("a[href*='logout']").map_err(|e| anyhow!("Failed to parse logout selector: {e}"))
}
