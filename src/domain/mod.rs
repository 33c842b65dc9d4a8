pub mod identifier;
pub mod models;
pub mod progress;

pub use identifier::{parse_account_id, AccountId};
pub use models::{InvalidEntry, PlayerRoster, RatingReport, ReportRow, RosterEntry};
pub use progress::PlayerProgress;
