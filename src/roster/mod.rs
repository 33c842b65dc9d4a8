pub mod loader;

pub use loader::{load_roster, parse_roster, write_roster, HEADER_TOKEN};
