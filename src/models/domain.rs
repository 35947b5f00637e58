use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A recipe row as served by the catalog's `recipe` table.
///
/// The catalog is loosely typed: rows may arrive with missing times or an
/// `recipe_ingredients` column that is not a list of strings. Defaulting is
/// stated here, once: times default to 0, an unusable ingredients column
/// becomes `None`, which downstream means "skip this recipe".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(rename = "recipe_id")]
    pub id: String,
    #[serde(rename = "recipe_name")]
    pub name: String,
    #[serde(rename = "recipe_ingredients", default, deserialize_with = "lenient_string_list")]
    pub ingredients: Option<Vec<String>>,
    #[serde(rename = "recipe_prep_time", default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(rename = "recipe_cook_time", default)]
    pub cook_time_minutes: Option<u32>,
    // Display fields, passed through untouched by scoring
    #[serde(rename = "recipe_description", default)]
    pub description: Option<String>,
    #[serde(rename = "recipe_image_url", default)]
    pub image_url: Option<String>,
    #[serde(rename = "recipe_servings_count", default)]
    pub servings: Option<u32>,
    #[serde(rename = "recipe_calories", default)]
    pub calories: Option<u32>,
    #[serde(rename = "recipe_instructions", default)]
    pub instructions: Vec<String>,
    #[serde(rename = "recipe_tags", default)]
    pub tags: Vec<String>,
    #[serde(rename = "recipe_owner", default)]
    pub owner: Option<String>,
    #[serde(rename = "recipe_is_trending", default)]
    pub is_trending: Option<bool>,
    #[serde(rename = "recipe_is_seasonal", default)]
    pub is_seasonal: Option<bool>,
}

impl RecipeRecord {
    /// Total prep + cook time in minutes, missing values counting as 0.
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.unwrap_or(0) + self.cook_time_minutes.unwrap_or(0)
    }
}

/// Accept only a JSON array of strings; anything else (null, absent, scalar,
/// array with non-string members) collapses to `None` instead of failing the
/// whole row.
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect::<Option<Vec<String>>>(),
        _ => None,
    }))
}

/// A recipe together with its computed match score.
///
/// Serializes as the original catalog row plus a `score` field, which is the
/// shape callers of the matching endpoint see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: RecipeRecord,
    pub score: f64,
}

/// Scoring weights for the matching heuristic.
///
/// These are fixed constants of the design: +5 per ingredient the caller
/// already has, -3 per ingredient the recipe needs but the caller lacks,
/// -2 per minute the recipe runs over the caller's time budget. Rankings
/// are only comparable across deployments if these stay untouched.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub present: f64,
    pub missing: f64,
    pub over_budget_per_minute: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            present: 5.0,
            missing: 3.0,
            over_budget_per_minute: 2.0,
        }
    }
}
