//! Chef-Kit Match - recipe matching engine for the Chef-Kit app
//!
//! Given the ingredients a user has on hand and an optional time budget,
//! this library scores every recipe in the catalog with a weighted
//! heuristic and returns the ten best matches. The catalog itself is an
//! external collaborator behind the [`catalog::RecipeCatalog`] trait.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use catalog::{CatalogError, MemoryCatalog, RecipeCatalog, RestCatalog};
pub use core::{parse_time_budget, MatchResult, Matcher};
pub use models::{MatchRequest, RecipeRecord, ScoredRecipe, ScoringWeights};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::default();
        let result = matcher.match_recipes(&MatchRequest::new(vec![], None), vec![]);
        assert!(result.matches.is_empty());
    }
}
