use rand::Rng;
use uuid::Uuid;

use crate::{
    models::{MealSlot, Recipe, RecipeCategory, Season, WeatherObservation},
    services::scoring,
};

/// Number of best-scored candidates the final pick is drawn from
pub const TOP_K: usize = 5;

/// Candidates may exceed their allocated budget by this factor before being filtered out
pub const COST_TOLERANCE: f64 = 1.2;

/// Floor for the synthesized default recipe's cost
pub const MIN_DEFAULT_COST: f64 = 5.0;

/// A selected recipe with the score that ranked it
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecipe {
    pub recipe: Recipe,
    pub score: i32,
}

/// Picks one recipe for a meal slot
///
/// See [`select_scored`] for the selection rules.
pub fn select_best_recipe<R: Rng + ?Sized>(
    candidates: &[Recipe],
    weather: &WeatherObservation,
    slot: MealSlot,
    allocated_budget: f64,
    rng: &mut R,
) -> Recipe {
    select_scored(candidates, weather, slot, allocated_budget, rng).recipe
}

/// Picks one recipe for a meal slot and returns it with its score
///
/// 1. An empty pool yields [`default_recipe`].
/// 2. Candidates costing more than `allocated_budget * COST_TOLERANCE` are dropped, unless that
///    would drop all of them, in which case the full pool is kept.
/// 3. Every remaining candidate is scored once; the pick is uniform among the `TOP_K` best.
pub fn select_scored<R: Rng + ?Sized>(
    candidates: &[Recipe],
    weather: &WeatherObservation,
    slot: MealSlot,
    allocated_budget: f64,
    rng: &mut R,
) -> ScoredRecipe {
    if candidates.is_empty() {
        tracing::warn!(
            meal_slot = %slot,
            allocated_budget,
            "No candidates for meal slot, using default recipe"
        );
        let recipe = default_recipe(slot, allocated_budget);
        let score = scoring::score(&recipe, weather, Some(allocated_budget), rng);
        return ScoredRecipe { recipe, score };
    }

    let ceiling = allocated_budget * COST_TOLERANCE;
    let affordable: Vec<&Recipe> = candidates
        .iter()
        .filter(|recipe| recipe.estimated_cost <= ceiling)
        .collect();

    let pool = if affordable.is_empty() {
        tracing::warn!(
            meal_slot = %slot,
            candidates = candidates.len(),
            ceiling,
            "Every candidate exceeds the cost tolerance, ranking the full pool"
        );
        candidates.iter().collect()
    } else {
        affordable
    };

    let mut scored: Vec<(&Recipe, i32)> = pool
        .into_iter()
        .map(|recipe| {
            let score = scoring::score(recipe, weather, Some(allocated_budget), rng);
            (recipe, score)
        })
        .collect();

    // Stable sort keeps provider order between equal scores
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(TOP_K);

    let (recipe, score) = scored[rng.gen_range(0..scored.len())];

    tracing::debug!(
        meal_slot = %slot,
        recipe = %recipe.name,
        score,
        shortlist = scored.len(),
        "Selected recipe"
    );

    ScoredRecipe {
        recipe: recipe.clone(),
        score,
    }
}

/// Fixed content of a placeholder recipe
struct DefaultTemplate {
    name: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
    cooking_time_minutes: u32,
    calories: u32,
    tags: &'static [&'static str],
    /// Fraction of the allocated budget the placeholder is priced at
    budget_share: f64,
}

const DEFAULT_BREAKFAST: DefaultTemplate = DefaultTemplate {
    name: "nutritious breakfast",
    description: "A simple, nourishing breakfast",
    ingredients: &["eggs", "milk", "bread"],
    steps: &["Boil the eggs", "Warm the milk", "Toast the bread"],
    cooking_time_minutes: 15,
    calories: 300,
    tags: &["simple", "nutritious"],
    budget_share: 0.8,
};

const DEFAULT_LUNCH: DefaultTemplate = DefaultTemplate {
    name: "hearty lunch",
    description: "A well-rounded lunch",
    ingredients: &["rice", "greens", "meat"],
    steps: &["Cook the rice", "Stir-fry the greens and meat"],
    cooking_time_minutes: 30,
    calories: 600,
    tags: &["nutritious", "balanced"],
    budget_share: 0.9,
};

const DEFAULT_DINNER: DefaultTemplate = DefaultTemplate {
    name: "light dinner",
    description: "A light, healthy dinner",
    ingredients: &["congee", "side dish", "fruit"],
    steps: &["Simmer the congee", "Prepare the side dish"],
    cooking_time_minutes: 25,
    calories: 400,
    tags: &["light", "healthy"],
    budget_share: 0.9,
};

/// Placeholder recipe served when a slot has no candidates at all
///
/// Its cost tracks the allocated budget (80% for breakfast, 90% otherwise), never below
/// `MIN_DEFAULT_COST`.
pub fn default_recipe(slot: MealSlot, allocated_budget: f64) -> Recipe {
    let template = match slot {
        MealSlot::Breakfast => &DEFAULT_BREAKFAST,
        MealSlot::Lunch => &DEFAULT_LUNCH,
        MealSlot::Dinner => &DEFAULT_DINNER,
    };
    Recipe {
        id: Uuid::nil(),
        name: template.name.to_string(),
        description: template.description.to_string(),
        meal_slot: slot,
        season: Season::AllYear,
        category: RecipeCategory::Chinese,
        ingredients: owned(template.ingredients),
        steps: owned(template.steps),
        cooking_time_minutes: template.cooking_time_minutes,
        calories: template.calories,
        estimated_cost: (allocated_budget * template.budget_share).max(MIN_DEFAULT_COST),
        suitable_for_hot: false,
        suitable_for_cold: false,
        suitable_for_rainy: false,
        suitable_for_sunny: true,
        tags: template.tags.iter().map(|s| s.to_string()).collect(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherCondition;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn recipe(name: &str, category: RecipeCategory, cost: f64) -> Recipe {
        Recipe::new(name, MealSlot::Lunch, Season::AllYear, category, 200, cost)
    }

    fn mild_weather() -> WeatherObservation {
        WeatherObservation::manual(20, WeatherCondition::Cloudy, None)
    }

    #[test]
    fn test_empty_breakfast_pool_yields_default() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = select_best_recipe(&[], &mild_weather(), MealSlot::Breakfast, 50.0, &mut rng);

        assert!(picked.is_placeholder());
        assert_eq!(picked.name, "nutritious breakfast");
        assert_eq!(picked.meal_slot, MealSlot::Breakfast);
        assert_eq!(picked.estimated_cost, 40.0);
        assert_eq!(picked.calories, 300);
    }

    #[test]
    fn test_default_recipes_per_slot() {
        let lunch = default_recipe(MealSlot::Lunch, 20.0);
        assert_eq!(lunch.name, "hearty lunch");
        assert_eq!(lunch.calories, 600);
        assert_eq!(lunch.estimated_cost, 18.0);

        let dinner = default_recipe(MealSlot::Dinner, 20.0);
        assert_eq!(dinner.name, "light dinner");
        assert_eq!(dinner.calories, 400);
        assert_eq!(dinner.estimated_cost, 18.0);
        assert_eq!(dinner.ingredients, vec!["congee", "side dish", "fruit"]);
        assert!(dinner.suitable_for_sunny);
        assert_eq!(dinner.season, Season::AllYear);
    }

    #[test]
    fn test_default_recipe_cost_floor() {
        for slot in MealSlot::ALL {
            assert_eq!(default_recipe(slot, 3.0).estimated_cost, MIN_DEFAULT_COST);
            assert_eq!(default_recipe(slot, 0.0).estimated_cost, MIN_DEFAULT_COST);
            assert!(default_recipe(slot, 1_000.0).estimated_cost >= MIN_DEFAULT_COST);
        }
    }

    #[test]
    fn test_selection_comes_from_affordable_candidates() {
        let candidates = vec![
            recipe("cheap", RecipeCategory::Chinese, 8.0),
            recipe("fair", RecipeCategory::Western, 11.0),
            recipe("pricey", RecipeCategory::Japanese, 40.0),
        ];
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let picked =
                select_best_recipe(&candidates, &mild_weather(), MealSlot::Lunch, 10.0, &mut rng);
            assert!(picked.name == "cheap" || picked.name == "fair");
        }
    }

    #[test]
    fn test_all_over_budget_falls_back_to_full_pool() {
        let candidates = vec![
            recipe("lobster", RecipeCategory::Western, 90.0),
            recipe("wagyu", RecipeCategory::Japanese, 120.0),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let picked =
                select_best_recipe(&candidates, &mild_weather(), MealSlot::Dinner, 10.0, &mut rng);
            assert!(candidates.contains(&picked));
            seen.insert(picked.name);
        }

        // Both get the same -30 budget term, so the perturbation decides
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_pick_is_limited_to_top_five() {
        // Five strong candidates beat five weak ones by more than the perturbation range
        let mut candidates = Vec::new();
        for i in 0..5 {
            let mut strong = recipe(&format!("soup-{}", i), RecipeCategory::Soup, 5.0);
            strong.suitable_for_rainy = true;
            candidates.push(strong);
            candidates.push(recipe(&format!("plain-{}", i), RecipeCategory::Chinese, 5.0));
        }

        let weather = WeatherObservation::manual(20, WeatherCondition::Rainy, None);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let picked = select_best_recipe(&candidates, &weather, MealSlot::Lunch, 20.0, &mut rng);
            assert!(picked.name.starts_with("soup-"), "picked {}", picked.name);
            seen.insert(picked.name);
        }

        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_selected_score_matches_recipe_context() {
        let candidates = vec![recipe("only", RecipeCategory::Chinese, 4.0)];
        let mut rng = StdRng::seed_from_u64(13);

        let picked = select_scored(&candidates, &mild_weather(), MealSlot::Lunch, 20.0, &mut rng);
        let base = scoring::contextual_score(&picked.recipe, &mild_weather(), Some(20.0));

        assert_eq!(picked.recipe, candidates[0]);
        assert!(picked.score >= base && picked.score <= base + scoring::MAX_PERTURBATION);
    }

    #[test]
    fn test_hot_sunny_lunch_prefers_light_dish() {
        let mut light = recipe("chilled tofu salad", RecipeCategory::Light, 20.0);
        light.suitable_for_sunny = true;
        let braised = recipe("braised pork belly", RecipeCategory::Chinese, 55.0);
        let candidates = vec![light, braised];

        let weather = WeatherObservation::manual(35, WeatherCondition::Sunny, None);
        let lunch_budget = 60.0 * 0.4;
        let mut rng = StdRng::seed_from_u64(2024);

        let light_wins = (0..100)
            .filter(|_| {
                select_best_recipe(&candidates, &weather, MealSlot::Lunch, lunch_budget, &mut rng)
                    .category
                    == RecipeCategory::Light
            })
            .count();

        assert!(light_wins >= 95, "light dish won only {} of 100", light_wins);
    }

    #[test]
    fn test_same_seed_same_pick() {
        let candidates: Vec<Recipe> = (0..8)
            .map(|i| recipe(&format!("dish-{}", i), RecipeCategory::Chinese, 6.0))
            .collect();

        let first = select_best_recipe(
            &candidates,
            &mild_weather(),
            MealSlot::Lunch,
            20.0,
            &mut StdRng::seed_from_u64(77),
        );
        let second = select_best_recipe(
            &candidates,
            &mild_weather(),
            MealSlot::Lunch,
            20.0,
            &mut StdRng::seed_from_u64(77),
        );

        assert_eq!(first, second);
    }
}
