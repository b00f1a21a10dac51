use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use rand::{rngs::StdRng, SeedableRng};

use crate::services::RecommendationEngine;

/// Where per-request random generators come from
#[derive(Debug)]
pub enum RngSource {
    /// Fresh OS entropy for every request
    Entropy,
    /// `seed + n` for the n-th request, so a replayed request sequence replays the same menus
    Seeded { seed: u64, counter: AtomicU64 },
}

impl RngSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource::Seeded {
                seed,
                counter: AtomicU64::new(0),
            },
            None => RngSource::Entropy,
        }
    }

    pub fn next_rng(&self) -> StdRng {
        match self {
            RngSource::Entropy => StdRng::from_entropy(),
            RngSource::Seeded { seed, counter } => {
                let n = counter.fetch_add(1, Ordering::Relaxed);
                StdRng::seed_from_u64(seed.wrapping_add(n))
            }
        }
    }
}

/// Shared application state
pub struct AppState {
    pub engine: RecommendationEngine,
    /// Budget applied when a request does not name one
    pub default_budget: f64,
    pub rng: RngSource,
}

impl AppState {
    pub fn new(engine: RecommendationEngine, default_budget: f64, rng: RngSource) -> Self {
        Self {
            engine,
            default_budget,
            rng,
        }
    }

    /// The engine, pinned to `date` when the request names one
    pub fn engine_for(&self, date: Option<NaiveDate>) -> RecommendationEngine {
        match date {
            Some(date) => self.engine.clone().with_date(date),
            None => self.engine.clone(),
        }
    }
}
