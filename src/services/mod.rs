pub mod scrape;

pub use scrape::{collect_ratings, Credentials, ScrapeService};
