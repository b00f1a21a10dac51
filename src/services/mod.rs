pub mod catalog;
pub mod providers;
pub mod recommendation;
pub mod scoring;
pub mod season;
pub mod selection;

pub use providers::CandidateProvider;
pub use recommendation::RecommendationEngine;
pub use scoring::{contextual_score, score};
pub use selection::{default_recipe, select_best_recipe};
