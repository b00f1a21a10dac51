//! Recipe scoring against weather, nutrition heuristics and budget
//!
//! Scores are a relative ranking signal only. They are never clamped and never shown to users.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::{Recipe, RecipeCategory, WeatherCondition, WeatherObservation};

pub const BASE_SCORE: i32 = 50;

/// At or above this temperature the weather counts as hot
pub const HOT_THRESHOLD_CELSIUS: i32 = 30;

/// At or below this temperature the weather counts as cold
pub const COLD_THRESHOLD_CELSIUS: i32 = 10;

/// Upper bound (inclusive) of the random perturbation added to every score
pub const MAX_PERTURBATION: i32 = 20;

pub const COOLING_TAGS: &[&str] = &["cold-dressed", "cool"];
pub const WARMING_TAGS: &[&str] = &["hot", "warming"];
pub const BALANCED_NUTRITION_TAG: &str = "balanced-nutrition";

const MODERATE_CALORIES: RangeInclusive<u32> = 300..=600;

/// Scores a recipe for the given weather and (optional) allocated budget
///
/// This is [`contextual_score`] plus a uniform draw from `0..=MAX_PERTURBATION`, so repeated
/// recommendations vary between otherwise tied candidates.
pub fn score<R: Rng + ?Sized>(
    recipe: &Recipe,
    weather: &WeatherObservation,
    budget: Option<f64>,
    rng: &mut R,
) -> i32 {
    contextual_score(recipe, weather, budget) + perturbation(rng)
}

/// Deterministic part of the score
pub fn contextual_score(
    recipe: &Recipe,
    weather: &WeatherObservation,
    budget: Option<f64>,
) -> i32 {
    let budget_term = budget
        .map(|allocated| budget_adjustment(recipe.estimated_cost, allocated))
        .unwrap_or(0);

    BASE_SCORE
        + temperature_adjustment(recipe, weather.temperature_celsius)
        + condition_adjustment(recipe, weather.condition)
        + nutrition_adjustment(recipe)
        + budget_term
}

pub fn perturbation<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(0..=MAX_PERTURBATION)
}

fn temperature_adjustment(recipe: &Recipe, temperature_celsius: i32) -> i32 {
    let mut adjustment = 0;

    if temperature_celsius >= HOT_THRESHOLD_CELSIUS {
        if recipe.suitable_for_hot {
            adjustment += 10;
        }
        if recipe.category == RecipeCategory::Light {
            adjustment += 15;
        }
        if recipe.has_any_tag(COOLING_TAGS) {
            adjustment += 20;
        }
    } else if temperature_celsius <= COLD_THRESHOLD_CELSIUS {
        if recipe.suitable_for_cold {
            adjustment += 10;
        }
        if recipe.category == RecipeCategory::Soup {
            adjustment += 15;
        }
        if recipe.has_any_tag(WARMING_TAGS) {
            adjustment += 20;
        }
    } else {
        // comfortable temperature
        adjustment += 10;
    }

    adjustment
}

fn condition_adjustment(recipe: &Recipe, condition: WeatherCondition) -> i32 {
    let mut adjustment = 0;

    match condition {
        WeatherCondition::Rainy => {
            if recipe.suitable_for_rainy {
                adjustment += 15;
            }
            if recipe.category == RecipeCategory::Soup {
                adjustment += 10;
            }
        }
        WeatherCondition::Sunny => {
            if recipe.suitable_for_sunny {
                adjustment += 10;
            }
            if recipe.category == RecipeCategory::Light {
                adjustment += 10;
            }
        }
        _ => adjustment += 5,
    }

    adjustment
}

fn nutrition_adjustment(recipe: &Recipe) -> i32 {
    let mut adjustment = 0;
    if recipe.has_tag(BALANCED_NUTRITION_TAG) {
        adjustment += 10;
    }
    if MODERATE_CALORIES.contains(&recipe.calories) {
        adjustment += 5;
    }
    adjustment
}

/// Cost-ratio adjustment for a recipe against the budget allocated to its slot
///
/// A non-positive or non-finite budget has no meaningful ratio and contributes nothing.
pub fn budget_adjustment(estimated_cost: f64, allocated_budget: f64) -> i32 {
    if !(allocated_budget.is_finite() && allocated_budget > 0.0) {
        return 0;
    }

    let ratio = estimated_cost / allocated_budget;
    if ratio <= 0.3 {
        15
    } else if ratio <= 0.7 {
        5
    } else if ratio <= 1.0 {
        0
    } else if ratio <= 1.2 {
        -10
    } else {
        -30
    }
}
