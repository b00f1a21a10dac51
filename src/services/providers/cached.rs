use crate::{
    cached,
    db::{Cache, CacheKey},
    error::AppResult,
    models::{MealSlot, Recipe, Season},
    services::providers::CandidateProvider,
};

/// Read-through Redis cache in front of another candidate provider
pub struct CachedCandidateProvider<P> {
    inner: P,
    cache: Cache,
    ttl: u64,
}

impl<P: CandidateProvider> CachedCandidateProvider<P> {
    pub fn new(inner: P, cache: Cache, ttl: u64) -> Self {
        Self { inner, cache, ttl }
    }
}

#[async_trait::async_trait]
impl<P: CandidateProvider> CandidateProvider for CachedCandidateProvider<P> {
    async fn fetch_candidates(
        &self,
        meal_slot: MealSlot,
        seasons: &[Season],
    ) -> AppResult<Vec<Recipe>> {
        cached!(
            self.cache,
            CacheKey::candidates(meal_slot, seasons),
            self.ttl,
            async {
                tracing::debug!(
                    provider = self.inner.name(),
                    meal_slot = %meal_slot,
                    "Candidate cache miss"
                );
                self.inner.fetch_candidates(meal_slot, seasons).await
            }
        )
    }

    fn name(&self) -> &'static str {
        "cached"
    }
}
