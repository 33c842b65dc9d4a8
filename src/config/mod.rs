pub mod ladders;
pub mod settings;

pub use ladders::{Ladder, LadderCatalog, DEFAULT_LADDERS};
pub use settings::{AppConfig, ReportSettings, ScraperSettings};
