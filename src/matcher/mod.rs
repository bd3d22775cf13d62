pub mod lexicon;
pub mod matching;
pub mod parser;
pub mod similarity;
pub mod types;

pub use types::*;

// Module-level constants
pub const TARGET_MATCHER: &str = "matcher";
