use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::{validate_budget, AppResult},
    middleware::RequestId,
    models::{CandidateQuery, Recipe, ScoreRequest, ScoreResponse},
    routes::AppState,
    services::scoring,
};

/// Candidate pool for a meal slot
pub async fn list(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Query(query): Query<CandidateQuery>,
) -> AppResult<Json<Vec<Recipe>>> {
    let season = query.season.unwrap_or_else(|| state.engine.season());
    let recipes = state.engine.candidates(query.meal_slot, season).await?;

    tracing::info!(
        request_id = %request_id,
        meal_slot = %query.meal_slot,
        season = %season,
        count = recipes.len(),
        "Listed candidate recipes"
    );

    Ok(Json(recipes))
}

/// Scores one recipe against a weather observation
pub async fn score(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreRequest>,
) -> AppResult<Json<ScoreResponse>> {
    let budget = request.budget.map(validate_budget).transpose()?;

    let contextual_score = scoring::contextual_score(&request.recipe, &request.weather, budget);
    let mut rng = state.rng.next_rng();
    let score = contextual_score + scoring::perturbation(&mut rng);

    Ok(Json(ScoreResponse {
        contextual_score,
        score,
    }))
}
