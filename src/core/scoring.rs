use crate::core::ingredients::{is_present, normalize};
use crate::models::{RecipeRecord, ScoringWeights};

/// Score a single recipe against the caller's normalized ingredient tokens
/// and time budget (in minutes, `f64::INFINITY` for no budget).
///
/// Scoring formula:
/// ```text
/// score = present * 5 - missing * 3 - minutes_over_budget * 2
/// ```
/// where `present` is the number of the recipe's ingredient lines matched by
/// any caller token, `missing` is the rest, and `minutes_over_budget` is how
/// far the recipe's total prep + cook time exceeds the budget (0 if it fits).
///
/// Returns `None` for a recipe whose ingredients column was unusable; such
/// recipes are excluded from ranking rather than scored as zero.
pub fn score_recipe(
    recipe: &RecipeRecord,
    tokens: &[String],
    budget_minutes: f64,
    weights: &ScoringWeights,
) -> Option<f64> {
    let lines = recipe.ingredients.as_ref()?;

    let present = lines
        .iter()
        .filter(|line| is_present(&normalize(line), tokens))
        .count();
    let missing = lines.len() - present;

    let total_time = f64::from(recipe.total_time_minutes());
    let over_budget = (total_time - budget_minutes).max(0.0);

    Some(
        present as f64 * weights.present
            - missing as f64 * weights.missing
            - over_budget * weights.over_budget_per_minute,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn burger() -> RecipeRecord {
        serde_json::from_value(json!({
            "recipe_id": "r1",
            "recipe_name": "Classic Beef Burger",
            "recipe_ingredients": ["500g ground beef", "4 burger buns", "1 tomato sliced"],
            "recipe_prep_time": 15,
            "recipe_cook_time": 15,
        }))
        .unwrap()
    }

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| normalize(t)).collect()
    }

    #[test]
    fn test_score_without_budget() {
        let score = score_recipe(
            &burger(),
            &tokens(&["beef", "buns"]),
            f64::INFINITY,
            &ScoringWeights::default(),
        );

        // present 2, missing 1: 2*5 - 1*3 = 7
        assert_eq!(score, Some(7.0));
    }

    #[test]
    fn test_score_with_time_penalty() {
        let score = score_recipe(
            &burger(),
            &tokens(&["beef", "buns"]),
            20.0,
            &ScoringWeights::default(),
        );

        // 30 minutes total, 10 over budget: 7 - 10*2 = -13
        assert_eq!(score, Some(-13.0));
    }

    #[test]
    fn test_no_tokens_all_missing() {
        let score = score_recipe(&burger(), &[], f64::INFINITY, &ScoringWeights::default());

        assert_eq!(score, Some(-9.0));
    }

    #[test]
    fn test_unusable_ingredients_not_scored() {
        let recipe: RecipeRecord = serde_json::from_value(json!({
            "recipe_id": "r2",
            "recipe_name": "Broken",
            "recipe_ingredients": null,
        }))
        .unwrap();

        let score = score_recipe(
            &recipe,
            &tokens(&["beef"]),
            f64::INFINITY,
            &ScoringWeights::default(),
        );

        assert_eq!(score, None);
    }

    #[test]
    fn test_zero_budget_penalizes_full_time() {
        let score = score_recipe(
            &burger(),
            &tokens(&["beef", "buns"]),
            0.0,
            &ScoringWeights::default(),
        );

        // the whole 30 minutes count as over budget: 7 - 30*2 = -53
        assert_eq!(score, Some(-53.0));
    }
}
