//! Candidate recipe sources
//!
//! The recommendation engine only needs "all recipes for this slot in any of these seasons".
//! Where those come from is pluggable: an in-memory catalog, PostgreSQL, or either of them
//! behind a Redis read-through cache.

use crate::{
    error::AppResult,
    models::{MealSlot, Recipe, Season},
};

pub mod cached;
pub mod memory;
pub mod postgres;

pub use cached::CachedCandidateProvider;
pub use memory::InMemoryCandidateProvider;
pub use postgres::PgCandidateProvider;

/// Trait for candidate recipe providers
///
/// Implementations return every recipe whose meal slot equals `meal_slot` and whose season is
/// one of `seasons`. The order of the returned list carries no meaning. An empty list is a valid
/// answer; failures are reported as errors and never swallowed into an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CandidateProvider: Send + Sync {
    async fn fetch_candidates(
        &self,
        meal_slot: MealSlot,
        seasons: &[Season],
    ) -> AppResult<Vec<Recipe>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

#[async_trait::async_trait]
impl<T: CandidateProvider + ?Sized> CandidateProvider for std::sync::Arc<T> {
    async fn fetch_candidates(
        &self,
        meal_slot: MealSlot,
        seasons: &[Season],
    ) -> AppResult<Vec<Recipe>> {
        (**self).fetch_candidates(meal_slot, seasons).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
