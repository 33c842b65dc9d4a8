pub mod writer;

pub use writer::{save_invalid, save_ratings, write_invalid, write_ratings};
