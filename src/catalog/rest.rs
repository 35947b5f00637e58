use crate::catalog::{CatalogError, RecipeCatalog};
use crate::config::CatalogSettings;
use crate::models::RecipeRecord;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Recipe catalog backed by a hosted PostgREST-style table API.
///
/// Reads the full `recipe` table with the service's API key; row-level
/// security on the hosted side already scopes what the key can see, so the
/// client passes no filters of its own.
pub struct RestCatalog {
    base_url: String,
    api_key: String,
    table: String,
    client: Client,
}

impl RestCatalog {
    pub fn new(base_url: String, api_key: String, table: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            table,
            client,
        }
    }

    pub fn from_settings(settings: &CatalogSettings) -> Self {
        Self::new(
            settings.url.clone(),
            settings.api_key.clone(),
            settings.table.clone(),
            settings.timeout_secs.unwrap_or(30),
        )
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }
}

#[async_trait]
impl RecipeCatalog for RestCatalog {
    async fn fetch_all_recipes(&self) -> Result<Vec<RecipeRecord>, CatalogError> {
        let url = self.table_url();

        tracing::debug!("Fetching recipes from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Api(format!(
                "Failed to fetch recipes: {}",
                response.status()
            )));
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(format!("Expected a JSON array: {}", e)))?;

        let total = rows.len();
        let recipes: Vec<RecipeRecord> = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<RecipeRecord>(row) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    tracing::warn!("Skipping undecodable recipe row: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} recipes ({} rows)", recipes.len(), total);

        Ok(recipes)
    }
}
