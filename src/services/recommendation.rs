//! Daily menu assembly
//!
//! The engine fetches one candidate pool per meal slot and picks a recipe for each. The
//! budget-conscious mode tries several budget splits over the same pools and keeps the menu with
//! the best value for money.

use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;

use crate::{
    error::AppResult,
    models::{
        BudgetPlan, BudgetSplit, DailyMenu, MealSlot, MenuStrategy, Recipe, Season, SplitTrial,
        WeatherObservation,
    },
    services::{providers::CandidateProvider, scoring, season, selection},
};

/// Daily budget used when the caller has no preference
pub const DEFAULT_BUDGET: f64 = 50.0;

/// Breakfast 20%, lunch 40%, dinner 40%
pub const STANDARD_SPLIT: BudgetSplit = BudgetSplit::new(0.2, 0.4, 0.4);

/// Splits tried by the budget-conscious mode, in tie-break order
pub const BUDGET_SPLITS: [BudgetSplit; 5] = [
    BudgetSplit::new(0.20, 0.40, 0.40),
    BudgetSplit::new(0.15, 0.45, 0.40),
    BudgetSplit::new(0.25, 0.35, 0.40),
    BudgetSplit::new(0.20, 0.35, 0.45),
    BudgetSplit::new(0.20, 0.45, 0.35),
];

/// Trial menus costing more than `budget * OVERAGE_CEILING` are discarded
pub const OVERAGE_CEILING: f64 = 1.1;

const IN_BUDGET_WEIGHT: f64 = 1.5;
const OVER_BUDGET_WEIGHT: f64 = 0.5;

/// Guards the value-for-money division against a zero-cost menu
const MIN_TOTAL_COST: f64 = 0.01;

/// Candidate pools for the three meal slots, fetched once per menu request
#[derive(Debug, Clone, Default)]
struct CandidatePools {
    breakfast: Vec<Recipe>,
    lunch: Vec<Recipe>,
    dinner: Vec<Recipe>,
}

impl CandidatePools {
    fn get(&self, slot: MealSlot) -> &[Recipe] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

/// Builds daily menus from a candidate provider
#[derive(Clone)]
pub struct RecommendationEngine {
    provider: Arc<dyn CandidateProvider>,
    date: Option<NaiveDate>,
}

impl RecommendationEngine {
    pub fn new(provider: Arc<dyn CandidateProvider>) -> Self {
        Self {
            provider,
            date: None,
        }
    }

    /// Pins the engine to a calendar date instead of the local clock
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn provider(&self) -> &Arc<dyn CandidateProvider> {
        &self.provider
    }

    /// The date menus are planned for
    pub fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(season::today)
    }

    pub fn season(&self) -> Season {
        season::season_on(self.date())
    }

    /// Builds a menu with the standard 20/40/40 budget split
    pub async fn generate_daily_menu<R: Rng + ?Sized>(
        &self,
        weather: &WeatherObservation,
        budget: f64,
        rng: &mut R,
    ) -> AppResult<DailyMenu> {
        let date = self.date();
        let pools = self.fetch_pools(season::season_on(date)).await?;

        let menu = assemble(&pools, date, weather, STANDARD_SPLIT, budget, rng);

        tracing::info!(
            date = %menu.date,
            budget,
            total_cost = menu.total_cost(),
            "Generated daily menu"
        );

        Ok(menu)
    }

    /// Builds the menu with the best value for money across [`BUDGET_SPLITS`]
    pub async fn generate_budget_conscious_menu<R: Rng + ?Sized>(
        &self,
        weather: &WeatherObservation,
        budget: f64,
        rng: &mut R,
    ) -> AppResult<DailyMenu> {
        Ok(self
            .plan_budget_conscious_menu(weather, budget, rng)
            .await?
            .menu)
    }

    /// Like [`generate_budget_conscious_menu`](Self::generate_budget_conscious_menu), but also
    /// reports every trial and which strategy produced the menu
    pub async fn plan_budget_conscious_menu<R: Rng + ?Sized>(
        &self,
        weather: &WeatherObservation,
        budget: f64,
        rng: &mut R,
    ) -> AppResult<BudgetPlan> {
        let date = self.date();
        let pools = self.fetch_pools(season::season_on(date)).await?;

        let ceiling = budget * OVERAGE_CEILING;
        let mut trials = Vec::with_capacity(BUDGET_SPLITS.len());
        let mut best: Option<(f64, BudgetSplit, DailyMenu)> = None;

        for split in BUDGET_SPLITS {
            let menu = assemble(&pools, date, weather, split, budget, rng);
            let total_score = rescore(&menu, weather, split, budget, rng);
            let total_cost = menu.total_cost();
            let weight = if total_cost <= budget {
                IN_BUDGET_WEIGHT
            } else {
                OVER_BUDGET_WEIGHT
            };
            let value_for_money = f64::from(total_score) / total_cost.max(MIN_TOTAL_COST) * weight;
            let within_ceiling = total_cost <= ceiling;

            tracing::debug!(
                breakfast = split.breakfast,
                lunch = split.lunch,
                dinner = split.dinner,
                total_cost,
                total_score,
                value_for_money,
                within_ceiling,
                "Evaluated budget split"
            );

            trials.push(SplitTrial {
                split,
                total_cost,
                total_score,
                value_for_money,
                within_ceiling,
            });

            // strict comparison keeps the earliest split on ties
            let improves = best
                .as_ref()
                .map_or(true, |(best_value, _, _)| value_for_money > *best_value);
            if within_ceiling && improves {
                best = Some((value_for_money, split, menu));
            }
        }

        let plan = match best {
            Some((value_for_money, split, menu)) => {
                tracing::info!(
                    date = %menu.date,
                    budget,
                    total_cost = menu.total_cost(),
                    value_for_money,
                    "Generated budget-conscious menu"
                );
                BudgetPlan {
                    menu,
                    strategy: MenuStrategy::Split { split },
                    trials,
                }
            }
            None => {
                tracing::warn!(
                    budget,
                    ceiling,
                    "No budget split stayed under the ceiling, using the standard menu"
                );
                let menu = assemble(&pools, date, weather, STANDARD_SPLIT, budget, rng);
                BudgetPlan {
                    menu,
                    strategy: MenuStrategy::StandardFallback,
                    trials,
                }
            }
        };

        Ok(plan)
    }

    /// Candidate pool for one slot in the given season (plus all-year recipes)
    pub async fn candidates(&self, slot: MealSlot, season: Season) -> AppResult<Vec<Recipe>> {
        self.provider
            .fetch_candidates(slot, &season::acceptable_seasons(season))
            .await
    }

    async fn fetch_pools(&self, season: Season) -> AppResult<CandidatePools> {
        let seasons = season::acceptable_seasons(season);

        let (breakfast, lunch, dinner) = tokio::try_join!(
            self.provider.fetch_candidates(MealSlot::Breakfast, &seasons),
            self.provider.fetch_candidates(MealSlot::Lunch, &seasons),
            self.provider.fetch_candidates(MealSlot::Dinner, &seasons),
        )?;

        tracing::debug!(
            provider = self.provider.name(),
            season = %season,
            breakfast = breakfast.len(),
            lunch = lunch.len(),
            dinner = dinner.len(),
            "Fetched candidate pools"
        );

        Ok(CandidatePools {
            breakfast,
            lunch,
            dinner,
        })
    }
}

/// Selects one recipe per slot under `split`
fn assemble<R: Rng + ?Sized>(
    pools: &CandidatePools,
    date: NaiveDate,
    weather: &WeatherObservation,
    split: BudgetSplit,
    budget: f64,
    rng: &mut R,
) -> DailyMenu {
    let mut pick = |slot: MealSlot| -> Recipe {
        selection::select_best_recipe(
            pools.get(slot),
            weather,
            slot,
            split.allocate(slot, budget),
            &mut *rng,
        )
    };

    let breakfast = pick(MealSlot::Breakfast);
    let lunch = pick(MealSlot::Lunch);
    let dinner = pick(MealSlot::Dinner);

    DailyMenu {
        date: season::menu_date(date),
        weather: weather.clone(),
        breakfast,
        lunch,
        dinner,
    }
}

/// Scores the picked recipes again against their slot allocations and sums the result
///
/// Each recipe gets a fresh perturbation, independent of the draw that ranked it.
fn rescore<R: Rng + ?Sized>(
    menu: &DailyMenu,
    weather: &WeatherObservation,
    split: BudgetSplit,
    budget: f64,
    rng: &mut R,
) -> i32 {
    MealSlot::ALL
        .iter()
        .map(|&slot| {
            scoring::score(
                menu.recipe(slot),
                weather,
                Some(split.allocate(slot, budget)),
                &mut *rng,
            )
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::{RecipeCategory, WeatherCondition},
        services::providers::{InMemoryCandidateProvider, MockCandidateProvider},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn july_third() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 3).unwrap()
    }

    fn sunny(temperature: i32) -> WeatherObservation {
        WeatherObservation::manual(temperature, WeatherCondition::Sunny, None)
    }

    fn recipe(name: &str, slot: MealSlot, cost: f64) -> Recipe {
        Recipe::new(name, slot, Season::AllYear, RecipeCategory::Chinese, 400, cost)
    }

    fn engine_over(recipes: Vec<Recipe>) -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(InMemoryCandidateProvider::new(recipes)))
            .with_date(july_third())
    }

    fn varied_catalog() -> Vec<Recipe> {
        let mut recipes = Vec::new();
        for (i, cost) in [4.0, 7.5, 9.0, 12.0, 16.0, 22.0, 30.0].into_iter().enumerate() {
            for slot in MealSlot::ALL {
                recipes.push(recipe(&format!("{} {}", slot, i), slot, cost));
            }
        }
        recipes
    }

    #[tokio::test]
    async fn test_standard_menu_fills_every_slot() {
        let engine = engine_over(varied_catalog());
        let mut rng = StdRng::seed_from_u64(1);

        let menu = engine
            .generate_daily_menu(&sunny(24), DEFAULT_BUDGET, &mut rng)
            .await
            .unwrap();

        assert_eq!(menu.date, "2024-7-3");
        assert_eq!(menu.breakfast.meal_slot, MealSlot::Breakfast);
        assert_eq!(menu.lunch.meal_slot, MealSlot::Lunch);
        assert_eq!(menu.dinner.meal_slot, MealSlot::Dinner);
        assert_eq!(
            menu.total_cost(),
            menu.breakfast.estimated_cost + menu.lunch.estimated_cost + menu.dinner.estimated_cost
        );
    }

    #[tokio::test]
    async fn test_empty_catalog_gives_placeholders() {
        let engine = engine_over(Vec::new());
        let mut rng = StdRng::seed_from_u64(2);

        let menu = engine
            .generate_daily_menu(&sunny(24), DEFAULT_BUDGET, &mut rng)
            .await
            .unwrap();

        assert!(menu.breakfast.is_placeholder());
        assert!(menu.lunch.is_placeholder());
        assert!(menu.dinner.is_placeholder());
        // 50 * 0.2 * 0.8
        assert_eq!(menu.breakfast.estimated_cost, 8.0);
    }

    #[tokio::test]
    async fn test_pools_are_requested_for_pinned_season() {
        let mut provider = MockCandidateProvider::new();
        provider
            .expect_fetch_candidates()
            .withf(|_, seasons| seasons.to_vec() == vec![Season::Summer, Season::AllYear])
            .times(3)
            .returning(|slot, _| Ok(vec![recipe("dish", slot, 10.0)]));
        provider.expect_name().return_const("mock");

        let engine = RecommendationEngine::new(Arc::new(provider)).with_date(july_third());
        let mut rng = StdRng::seed_from_u64(3);
        engine
            .generate_daily_menu(&sunny(24), DEFAULT_BUDGET, &mut rng)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_budget_conscious_fetches_each_pool_once() {
        let mut provider = MockCandidateProvider::new();
        provider
            .expect_fetch_candidates()
            .times(3)
            .returning(|slot, _| Ok(vec![recipe("dish", slot, 10.0), recipe("feast", slot, 40.0)]));
        provider.expect_name().return_const("mock");

        let engine = RecommendationEngine::new(Arc::new(provider)).with_date(july_third());
        let mut rng = StdRng::seed_from_u64(4);
        let plan = engine
            .plan_budget_conscious_menu(&sunny(24), DEFAULT_BUDGET, &mut rng)
            .await
            .unwrap();

        assert_eq!(plan.trials.len(), BUDGET_SPLITS.len());
    }

    #[tokio::test]
    async fn test_provider_errors_propagate() {
        let mut provider = MockCandidateProvider::new();
        provider.expect_fetch_candidates().returning(|slot, _| match slot {
            MealSlot::Lunch => Err(AppError::Provider("recipe store unavailable".to_string())),
            _ => Ok(Vec::new()),
        });
        provider.expect_name().return_const("mock");

        let engine = RecommendationEngine::new(Arc::new(provider)).with_date(july_third());
        let mut rng = StdRng::seed_from_u64(5);

        let standard = engine
            .generate_daily_menu(&sunny(24), DEFAULT_BUDGET, &mut rng)
            .await;
        assert!(matches!(standard, Err(AppError::Provider(_))));

        let budget = engine
            .generate_budget_conscious_menu(&sunny(24), DEFAULT_BUDGET, &mut rng)
            .await;
        assert!(matches!(budget, Err(AppError::Provider(_))));
    }

    #[tokio::test]
    async fn test_budget_conscious_total_within_ceiling_unless_fallback() {
        let engine = engine_over(varied_catalog());

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = engine
                .plan_budget_conscious_menu(&sunny(18), 40.0, &mut rng)
                .await
                .unwrap();

            if !plan.fell_back() {
                assert!(plan.menu.total_cost() <= 40.0 * OVERAGE_CEILING);
            }
        }
    }

    #[tokio::test]
    async fn test_falls_back_to_standard_when_everything_is_too_expensive() {
        let catalog = MealSlot::ALL
            .into_iter()
            .map(|slot| recipe("banquet", slot, 100.0))
            .collect();
        let engine = engine_over(catalog);
        let mut rng = StdRng::seed_from_u64(6);

        let plan = engine
            .plan_budget_conscious_menu(&sunny(24), DEFAULT_BUDGET, &mut rng)
            .await
            .unwrap();

        assert!(plan.fell_back());
        assert!(plan.trials.iter().all(|t| !t.within_ceiling));
        assert_eq!(plan.menu.total_cost(), 300.0);
    }

    #[tokio::test]
    async fn test_winning_split_has_best_value() {
        let engine = engine_over(varied_catalog());
        let mut rng = StdRng::seed_from_u64(7);

        let plan = engine
            .plan_budget_conscious_menu(&sunny(24), DEFAULT_BUDGET, &mut rng)
            .await
            .unwrap();

        let MenuStrategy::Split { split } = plan.strategy else {
            panic!("expected a split to win, got {:?}", plan.strategy);
        };

        let best = plan
            .trials
            .iter()
            .filter(|t| t.within_ceiling)
            .map(|t| t.value_for_money)
            .fold(f64::MIN, f64::max);
        let winner = plan
            .trials
            .iter()
            .find(|t| t.split == split && t.within_ceiling)
            .unwrap();
        assert_eq!(winner.value_for_money, best);
        assert_eq!(winner.total_cost, plan.menu.total_cost());
    }

    #[tokio::test]
    async fn test_earliest_split_wins_ties() {
        // identical costs in every trial, so only the perturbation separates them
        let catalog = MealSlot::ALL
            .into_iter()
            .map(|slot| recipe("only", slot, 5.0))
            .collect();
        let engine = engine_over(catalog);
        let mut rng = StdRng::seed_from_u64(8);

        let plan = engine
            .plan_budget_conscious_menu(&sunny(24), DEFAULT_BUDGET, &mut rng)
            .await
            .unwrap();

        let MenuStrategy::Split { split } = plan.strategy else {
            panic!("expected a split to win");
        };
        let first_best = plan
            .trials
            .iter()
            .filter(|t| t.within_ceiling)
            .fold(None::<&SplitTrial>, |acc, t| match acc {
                Some(b) if b.value_for_money >= t.value_for_money => Some(b),
                _ => Some(t),
            })
            .unwrap();
        assert_eq!(first_best.split, split);
    }

    #[tokio::test]
    async fn test_same_seed_gives_same_menu() {
        let engine = engine_over(varied_catalog());

        let first = engine
            .generate_daily_menu(&sunny(31), 60.0, &mut StdRng::seed_from_u64(9))
            .await
            .unwrap();
        let second = engine
            .generate_daily_menu(&sunny(31), 60.0, &mut StdRng::seed_from_u64(9))
            .await
            .unwrap();

        assert_eq!(first.breakfast.id, second.breakfast.id);
        assert_eq!(first.lunch.id, second.lunch.id);
        assert_eq!(first.dinner.id, second.dinner.id);
    }

    #[tokio::test]
    async fn test_candidates_lists_season_and_all_year() {
        let mut winter = recipe("hotpot", MealSlot::Dinner, 30.0);
        winter.season = Season::Winter;
        let mut summer = recipe("cold noodles", MealSlot::Dinner, 12.0);
        summer.season = Season::Summer;
        let all_year = recipe("bass", MealSlot::Dinner, 35.0);

        let engine = engine_over(vec![winter, summer, all_year]);
        let pool = engine
            .candidates(MealSlot::Dinner, Season::Winter)
            .await
            .unwrap();

        let names: Vec<&str> = pool.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["hotpot", "bass"]);
    }

    fn fixed_menu_engine(breakfast: f64, lunch: f64, dinner: f64) -> RecommendationEngine {
        engine_over(vec![
            recipe("porridge", MealSlot::Breakfast, breakfast),
            recipe("noodles", MealSlot::Lunch, lunch),
            recipe("steamed fish", MealSlot::Dinner, dinner),
        ])
    }

    #[tokio::test]
    async fn test_trial_score_is_a_fresh_score_of_the_picks() {
        let catalog = vec![
            recipe("porridge", MealSlot::Breakfast, 8.0),
            recipe("noodles", MealSlot::Lunch, 12.0),
            recipe("steamed fish", MealSlot::Dinner, 20.0),
        ];
        let engine = engine_over(catalog.clone());
        let weather = sunny(24);

        let plan = engine
            .plan_budget_conscious_menu(&weather, DEFAULT_BUDGET, &mut StdRng::seed_from_u64(21))
            .await
            .unwrap();

        // replay the first trial: three selections, then one extra draw per picked recipe
        let split = BUDGET_SPLITS[0];
        let mut replay = StdRng::seed_from_u64(21);
        let pool_for = |slot: MealSlot| -> Vec<Recipe> {
            catalog.iter().filter(|r| r.meal_slot == slot).cloned().collect()
        };
        for slot in MealSlot::ALL {
            selection::select_scored(
                &pool_for(slot),
                &weather,
                slot,
                split.allocate(slot, DEFAULT_BUDGET),
                &mut replay,
            );
        }
        let rescored: i32 = MealSlot::ALL
            .iter()
            .map(|&slot| {
                scoring::score(
                    &pool_for(slot)[0],
                    &weather,
                    Some(split.allocate(slot, DEFAULT_BUDGET)),
                    &mut replay,
                )
            })
            .sum();

        assert_eq!(plan.trials[0].split, split);
        assert_eq!(plan.trials[0].total_score, rescored);
    }

    #[tokio::test]
    async fn test_in_budget_trial_is_weighted_up() {
        let engine = fixed_menu_engine(4.0, 8.0, 8.0);
        let plan = engine
            .plan_budget_conscious_menu(&sunny(24), 20.0, &mut StdRng::seed_from_u64(30))
            .await
            .unwrap();

        assert!(!plan.fell_back());
        for trial in &plan.trials {
            assert_eq!(trial.total_cost, 20.0);
            assert!(trial.within_ceiling);
            assert_eq!(
                trial.value_for_money,
                f64::from(trial.total_score) / 20.0 * 1.5
            );
        }
    }

    #[tokio::test]
    async fn test_over_budget_trial_at_ceiling_is_kept_and_weighted_down() {
        // 20 * 1.1 is exactly 22.0 in f64
        let engine = fixed_menu_engine(6.0, 8.0, 8.0);
        let plan = engine
            .plan_budget_conscious_menu(&sunny(24), 20.0, &mut StdRng::seed_from_u64(31))
            .await
            .unwrap();

        assert!(matches!(plan.strategy, MenuStrategy::Split { .. }));
        for trial in &plan.trials {
            assert_eq!(trial.total_cost, 22.0);
            assert!(trial.within_ceiling);
            assert_eq!(
                trial.value_for_money,
                f64::from(trial.total_score) / 22.0 * 0.5
            );
        }
    }

    #[tokio::test]
    async fn test_trial_just_past_ceiling_is_discarded() {
        let engine = fixed_menu_engine(6.5, 8.0, 8.0);
        let plan = engine
            .plan_budget_conscious_menu(&sunny(24), 20.0, &mut StdRng::seed_from_u64(32))
            .await
            .unwrap();

        assert!(plan.fell_back());
        assert!(plan.trials.iter().all(|t| !t.within_ceiling));
    }
}
