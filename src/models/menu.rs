use serde::{Deserialize, Serialize};

use super::{MealSlot, Recipe, WeatherObservation};

/// One recipe per meal slot for a single day
///
/// Built fresh for every recommendation; storing it is the caller's business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyMenu {
    /// Calendar date as `YYYY-M-D`, without zero padding
    pub date: String,
    pub weather: WeatherObservation,
    pub breakfast: Recipe,
    pub lunch: Recipe,
    pub dinner: Recipe,
}

impl DailyMenu {
    pub fn recipe(&self, slot: MealSlot) -> &Recipe {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Estimated spend for the day: the three recipe costs added together
    pub fn total_cost(&self) -> f64 {
        MealSlot::ALL
            .iter()
            .map(|slot| self.recipe(*slot).estimated_cost)
            .sum()
    }

    pub fn remaining_budget(&self, budget: f64) -> f64 {
        budget - self.total_cost()
    }

    pub fn is_over_budget(&self, budget: f64) -> bool {
        self.total_cost() > budget
    }
}

/// Fractions of the daily budget handed to breakfast, lunch and dinner
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetSplit {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
}

impl BudgetSplit {
    pub const fn new(breakfast: f64, lunch: f64, dinner: f64) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
        }
    }

    pub fn share(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    /// Budget allocated to a slot out of the daily total
    pub fn allocate(&self, slot: MealSlot, budget: f64) -> f64 {
        budget * self.share(slot)
    }
}

/// Outcome of trying one budget split in budget-conscious mode
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SplitTrial {
    pub split: BudgetSplit,
    pub total_cost: f64,
    pub total_score: i32,
    pub value_for_money: f64,
    /// False when the trial's total broke the hard overage ceiling and was discarded
    pub within_ceiling: bool,
}

/// Which path produced a budget-conscious menu
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuStrategy {
    /// A budget split won the value-for-money comparison
    Split { split: BudgetSplit },
    /// No split stayed under the ceiling; the standard 20/40/40 menu was used instead
    StandardFallback,
}

/// Budget-conscious menu together with how it was chosen
#[derive(Debug, Clone)]
pub struct BudgetPlan {
    pub menu: DailyMenu,
    pub strategy: MenuStrategy,
    pub trials: Vec<SplitTrial>,
}

impl BudgetPlan {
    pub fn fell_back(&self) -> bool {
        matches!(self.strategy, MenuStrategy::StandardFallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecipeCategory, Season, WeatherCondition};

    fn menu_with_costs(breakfast: f64, lunch: f64, dinner: f64) -> DailyMenu {
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
    fn test_total_cost_sums_all_slots() {
        let menu = menu_with_costs(8.0, 20.5, 16.0);
        assert_eq!(menu.total_cost(), 44.5);
        assert_eq!(menu.remaining_budget(50.0), 5.5);
        assert!(!menu.is_over_budget(50.0));
    }

    #[test]
    fn test_over_budget() {
        let menu = menu_with_costs(10.0, 30.0, 28.0);
        assert!(menu.is_over_budget(50.0));
        assert_eq!(menu.remaining_budget(50.0), -18.0);
    }

    #[test]
    fn test_recipe_by_slot() {
        let menu = menu_with_costs(1.0, 2.0, 3.0);
        assert_eq!(menu.recipe(MealSlot::Lunch).estimated_cost, 2.0);
        assert_eq!(menu.recipe(MealSlot::Dinner).meal_slot, MealSlot::Dinner);
    }

    #[test]
    fn test_budget_split_allocation() {
        let split = BudgetSplit::new(0.2, 0.4, 0.4);
        assert_eq!(split.allocate(MealSlot::Breakfast, 50.0), 10.0);
        assert_eq!(split.allocate(MealSlot::Lunch, 50.0), 20.0);
    }

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_value(MenuStrategy::StandardFallback).unwrap();
        assert_eq!(json["kind"], "standard_fallback");

        let json = serde_json::to_value(MenuStrategy::Split {
            split: BudgetSplit::new(0.15, 0.45, 0.4),
        })
        .unwrap();
        assert_eq!(json["kind"], "split");
        assert_eq!(json["split"]["breakfast"], 0.15);
    }
}
