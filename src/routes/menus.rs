use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    error::{validate_budget, AppResult},
    middleware::RequestId,
    models::{MenuRequest, MenuResponse, SeasonResponse},
    routes::AppState,
    services::season,
};

/// Builds a menu with the standard budget split
pub async fn daily(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Json(request): Json<MenuRequest>,
) -> AppResult<Json<MenuResponse>> {
    let budget = validate_budget(request.budget.unwrap_or(state.default_budget))?;

    tracing::info!(
        request_id = %request_id,
        temperature = request.weather.temperature_celsius,
        condition = %request.weather.condition,
        budget,
        "Processing daily menu request"
    );

    let engine = state.engine_for(request.date);
    let mut rng = state.rng.next_rng();
    let menu = engine
        .generate_daily_menu(&request.weather, budget, &mut rng)
        .await?;

    Ok(Json(MenuResponse::new(menu, budget)))
}

/// Builds the best value-for-money menu across the budget splits
pub async fn budget_conscious(
    State(state): State<Arc<AppState>>,
    request_id: RequestId,
    Json(request): Json<MenuRequest>,
) -> AppResult<Json<MenuResponse>> {
    let budget = validate_budget(request.budget.unwrap_or(state.default_budget))?;

    tracing::info!(
        request_id = %request_id,
        temperature = request.weather.temperature_celsius,
        condition = %request.weather.condition,
        budget,
        "Processing budget-conscious menu request"
    );

    let engine = state.engine_for(request.date);
    let mut rng = state.rng.next_rng();
    let plan = engine
        .plan_budget_conscious_menu(&request.weather, budget, &mut rng)
        .await?;

    tracing::info!(
        request_id = %request_id,
        fell_back = plan.fell_back(),
        "Budget-conscious menu completed"
    );

    Ok(Json(MenuResponse::from((plan, budget))))
}

/// Season and date the engine is currently planning for
pub async fn current_season(State(state): State<Arc<AppState>>) -> Json<SeasonResponse> {
    let date = state.engine.date();
    Json(SeasonResponse {
        season: season::season_on(date),
        date: season::menu_date(date),
    })
}
