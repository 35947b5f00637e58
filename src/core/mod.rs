// Core algorithm exports
pub mod ingredients;
pub mod matcher;
pub mod scoring;
pub mod time;

pub use ingredients::{is_match, is_present, normalize};
pub use matcher::{MatchResult, Matcher};
pub use scoring::score_recipe;
pub use time::parse_time_budget;
