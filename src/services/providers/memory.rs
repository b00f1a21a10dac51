use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{MealSlot, Recipe, Season},
    services::{catalog, providers::CandidateProvider},
};

/// Candidate provider over an in-process recipe list
///
/// Keeps insertion order, so results are stable for a given catalog.
#[derive(Default)]
pub struct InMemoryCandidateProvider {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryCandidateProvider {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }

    /// Provider seeded with the built-in sample recipes
    pub fn with_sample_catalog() -> Self {
        Self::new(catalog::sample_recipes())
    }

    pub async fn insert(&self, recipe: Recipe) {
        self.recipes.write().await.push(recipe);
    }

    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl CandidateProvider for InMemoryCandidateProvider {
    async fn fetch_candidates(
        &self,
        meal_slot: MealSlot,
        seasons: &[Season],
    ) -> AppResult<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes
            .iter()
            .filter(|r| r.meal_slot == meal_slot && seasons.contains(&r.season))
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
