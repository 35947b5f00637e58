use crate::catalog::{CatalogError, RecipeCatalog};
use crate::models::RecipeRecord;
use async_trait::async_trait;

/// In-memory recipe catalog.
///
/// Serves a fixed snapshot of recipes. Stands in for the hosted table API
/// in tests, and can embed a static catalog without any network dependency.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    recipes: Vec<RecipeRecord>,
}

impl MemoryCatalog {
    pub fn new(recipes: Vec<RecipeRecord>) -> Self {
        Self { recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait]
impl RecipeCatalog for MemoryCatalog {
    async fn fetch_all_recipes(&self) -> Result<Vec<RecipeRecord>, CatalogError> {
        Ok(self.recipes.clone())
    }
}
