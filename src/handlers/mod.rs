use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub mod articles;
pub mod auth;
pub mod books;
pub mod indicators;
pub mod stocks;

/// GET /api/health - liveness plus a store round-trip.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(|e| {
            tracing::error!("Health check database error: {}", e);
            ApiError::service_unavailable("Database unavailable")
        })?;

    Ok(Json(json!({
        "status": "OK",
        "message": "Research Portfolio API is running"
    })))
}

/// Default response when no route matched the request.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
