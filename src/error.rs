use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
///
/// The recommendation engine itself never produces these for data edge cases; they come from
/// candidate providers (storage, cache) or from request validation.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Candidate provider error: {0}")]
    Provider(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(_) | AppError::Cache(_) | AppError::Provider(_) => {
                tracing::error!(error = %self, "Candidate lookup failed");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Unable to build today's menu: {}", self),
                )
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Rejects budgets that cannot drive the cost-ratio arithmetic
pub fn validate_budget(budget: f64) -> AppResult<f64> {
    if budget.is_finite() && budget > 0.0 {
        Ok(budget)
    } else {
        Err(AppError::InvalidInput(format!(
            "Budget must be a positive amount, got {}",
            budget
        )))
    }
}
