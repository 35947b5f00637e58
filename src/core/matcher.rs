use crate::catalog::{CatalogError, RecipeCatalog};
use crate::core::ingredients::normalize;
use crate::core::scoring::score_recipe;
use crate::core::time::parse_time_budget;
use crate::models::{MatchRequest, RecipeRecord, ScoredRecipe, ScoringWeights};
use tracing::{debug, warn};

/// Number of ranked recipes returned per request.
const TOP_K: usize = 10;

/// Result of ranking a candidate set.
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredRecipe>,
    pub total_candidates: usize,
}

/// Recipe matching orchestrator.
///
/// Scores every candidate against the request, drops candidates whose
/// ingredient data is unusable, and returns the top entries sorted by score
/// descending. The whole computation is pure: same candidates plus same
/// request always yield the same ranking.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Fetch the full candidate snapshot from the catalog and rank it.
    ///
    /// The fetch is the only suspension point; a catalog failure propagates
    /// to the caller untouched, while an empty catalog is simply an empty
    /// result.
    pub async fn find_recipes<C>(
        &self,
        catalog: &C,
        request: &MatchRequest,
    ) -> Result<MatchResult, CatalogError>
    where
        C: RecipeCatalog + ?Sized,
    {
        let candidates = catalog.fetch_all_recipes().await?;
        Ok(self.match_recipes(request, candidates))
    }

    /// Rank an in-memory candidate set against a request.
    ///
    /// Candidates without a usable ingredients list are excluded from the
    /// ranking entirely rather than scored as zero. Ties keep catalog order
    /// (the sort is stable; no secondary key is applied).
    pub fn match_recipes(
        &self,
        request: &MatchRequest,
        candidates: Vec<RecipeRecord>,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let tokens: Vec<String> = request
            .available_ingredients
            .iter()
            .map(|token| normalize(token))
            .collect();
        let budget_minutes = parse_time_budget(request.time_budget.as_deref());

        let mut matches: Vec<ScoredRecipe> = candidates
            .into_iter()
            .filter_map(|recipe| {
                match score_recipe(&recipe, &tokens, budget_minutes, &self.weights) {
                    Some(score) => Some(ScoredRecipe { recipe, score }),
                    None => {
                        warn!("Skipping recipe {} with unusable ingredients", recipe.id);
                        None
                    }
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(TOP_K);

        debug!(
            "Ranked {} of {} candidates (budget: {} min)",
            matches.len(),
            total_candidates,
            budget_minutes
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
