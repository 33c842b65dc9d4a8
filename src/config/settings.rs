use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub base_url: String,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 250, // 4 req/sec
            user_agent: "LadderRatings/0.1",
            timeout_secs: 30,
            base_url: "https://www.voobly.com".to_string(),
        }
    }
}

impl ScraperSettings {
    /// Page visited first so the session picks up its cookies
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// Form target for the credentials
    pub fn login_auth_url(&self) -> String {
        format!("{}/login/auth", self.base_url)
    }

    pub fn ratings_url(&self, account: &str, ladder_id: u32) -> String {
        format!(
            "{}/profile/view/{uid}/Ratings/games/profile/{uid}/{}",
            self.base_url,
            ladder_id,
            uid = account
        )
    }
}

#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub roster_path: PathBuf,
    pub output_path: PathBuf,
    pub invalid_path: PathBuf,
    /// Reported as current rating when none of a player's accounts has games
    pub baseline_rating: i32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from("players.csv"),
            output_path: PathBuf::from("ratings.csv"),
            invalid_path: PathBuf::from("invalid_players.csv"),
            baseline_rating: 1600,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scraper: ScraperSettings::default(),
            report: ReportSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_url() {
        let settings = ScraperSettings::default();
        assert_eq!(
            settings.ratings_url("123684015", 131),
            "https://www.voobly.com/profile/view/123684015/Ratings/games/profile/123684015/131"
        );
    }

    #[test]
    fn test_login_urls() {
        let settings = ScraperSettings {
            base_url: "http://localhost:8080".to_string(),
            ..ScraperSettings::default()
        };
        assert_eq!(settings.login_url(), "http://localhost:8080/login");
        assert_eq!(settings.login_auth_url(), "http://localhost:8080/login/auth");
    }
}
