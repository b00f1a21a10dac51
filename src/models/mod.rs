use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod menu;
mod recipe;
mod weather;

pub use menu::{BudgetPlan, BudgetSplit, DailyMenu, MenuStrategy, SplitTrial};
pub use recipe::{MealSlot, Recipe, RecipeCategory, Season};
pub use weather::{WeatherCondition, WeatherObservation, DEFAULT_HUMIDITY, MANUAL_LOCATION};

// ============================================================================
// API request / response types
// ============================================================================

/// Request to build a menu for one day
#[derive(Debug, Clone, Deserialize)]
pub struct MenuRequest {
    pub weather: WeatherObservation,
    /// Daily budget; the configured default applies when omitted
    #[serde(default)]
    pub budget: Option<f64>,
    /// Date to plan for; today when omitted
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// A generated menu together with its budget summary
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub menu: DailyMenu,
    pub budget: f64,
    /// Sum of the three estimated recipe costs
    pub spent: f64,
    pub remaining: f64,
    pub over_budget: bool,
    /// Only present for budget-conscious menus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<MenuStrategy>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trials: Vec<SplitTrial>,
}

impl MenuResponse {
    pub fn new(menu: DailyMenu, budget: f64) -> Self {
        Self {
            budget,
            spent: menu.total_cost(),
            remaining: menu.remaining_budget(budget),
            over_budget: menu.is_over_budget(budget),
            menu,
            strategy: None,
            trials: Vec::new(),
        }
    }
}

impl From<(BudgetPlan, f64)> for MenuResponse {
    fn from((plan, budget): (BudgetPlan, f64)) -> Self {
        let mut response = MenuResponse::new(plan.menu, budget);
        response.strategy = Some(plan.strategy);
        response.trials = plan.trials;
        response
    }
}

/// Query for listing a slot's candidate pool
#[derive(Debug, Deserialize)]
pub struct CandidateQuery {
    pub meal_slot: MealSlot,
    /// Season to list for; the current season when omitted
    #[serde(default)]
    pub season: Option<Season>,
}

/// Request to score one recipe against a weather observation
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub recipe: Recipe,
    pub weather: WeatherObservation,
    #[serde(default)]
    pub budget: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    /// Score without the random perturbation
    pub contextual_score: i32,
    /// Score including the random perturbation, as used for ranking
    pub score: i32,
}

#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub season: Season,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_costing(breakfast: f64, lunch: f64, dinner: f64) -> DailyMenu {
        let recipe = |slot, cost| {
            Recipe::new("dish", slot, Season::AllYear, RecipeCategory::Chinese, 400, cost)
        };

        DailyMenu {
            date: "2024-7-3".to_string(),
            weather: WeatherObservation::manual(25, WeatherCondition::Cloudy, None),
            breakfast: recipe(MealSlot::Breakfast, breakfast),
            lunch: recipe(MealSlot::Lunch, lunch),
            dinner: recipe(MealSlot::Dinner, dinner),
        }
    }

    #[test]
    fn test_menu_response_summarizes_spend() {
        let menu = menu_costing(8.0, 20.0, 32.0);
        let response = MenuResponse::new(menu.clone(), 50.0);

        assert_eq!(response.spent, 60.0);
        assert_eq!(response.remaining, menu.remaining_budget(50.0));
        assert_eq!(response.remaining, -10.0);
        assert!(response.over_budget);
        assert!(response.strategy.is_none());
    }

    #[test]
    fn test_menu_response_at_exact_budget_is_not_over() {
        let response = MenuResponse::new(menu_costing(10.0, 20.0, 20.0), 50.0);

        assert_eq!(response.remaining, 0.0);
        assert!(!response.over_budget);
    }
}
