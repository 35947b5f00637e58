// Model exports
pub mod domain;
pub mod requests;

pub use domain::{RecipeRecord, ScoredRecipe, ScoringWeights};
pub use requests::MatchRequest;
