use serde::{Deserialize, Serialize};

/// A single matching request: what the caller has on hand, and optionally
/// how long they are willing to spend, as an `"mm:ss"` string.
///
/// Constructed per call and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(rename = "ingredients", default)]
    pub available_ingredients: Vec<String>,
    #[serde(rename = "time", default)]
    pub time_budget: Option<String>,
}

impl MatchRequest {
    pub fn new(available_ingredients: Vec<String>, time_budget: Option<String>) -> Self {
        Self {
            available_ingredients,
            time_budget,
        }
    }
}
