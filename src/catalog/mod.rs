// Catalog provider exports
pub mod memory;
pub mod rest;

use crate::models::RecipeRecord;
use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryCatalog;
pub use rest::RestCatalog;

/// Errors that can occur when fetching from a recipe catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Source of candidate recipes.
///
/// The engine consumes a full snapshot per invocation; no filtering,
/// pagination, or caching happens behind this trait. Implementations are
/// swappable so the matcher can run against a remote table API in
/// production and an in-memory fixture in tests.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    async fn fetch_all_recipes(&self) -> Result<Vec<RecipeRecord>, CatalogError>;
}
