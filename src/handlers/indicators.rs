use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::middleware::{AuthUser, MaybeAuthUser};
use crate::models::{Indicator, IndicatorPayload};
use crate::state::AppState;

fn parse_id(id: &str) -> Result<i64, ApiError> {
    id.parse()
        .map_err(|_| ApiError::not_found("Indicator not found"))
}

/// GET /api/indicators
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
) -> Result<Json<Vec<Indicator>>, ApiError> {
    debug!(admin = user.is_some(), "Listing indicators");
    Ok(Json(state.indicators.list().await?))
}

/// GET /api/indicators/:id
pub async fn get(
    State(state): State<AppState>,
    MaybeAuthUser(_): MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<Json<Indicator>, ApiError> {
    let id = parse_id(&id)?;
    state
        .indicators
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Indicator not found"))
}

/// POST /api/indicators (admin only)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<IndicatorPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (name, value, date) = payload.validated()?;
    let id = state
        .indicators
        .insert(
            name,
            value,
            payload.unit.as_deref(),
            date,
            payload.description.as_deref(),
        )
        .await?;
    info!(user = %user.username, %name, "Indicator created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Indicator created successfully", "id": id })),
    ))
}

/// PUT /api/indicators/:id (admin only, full replace)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<IndicatorPayload>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let (name, value, date) = payload.validated()?;
    state
        .indicators
        .update(
            id,
            name,
            value,
            payload.unit.as_deref(),
            date,
            payload.description.as_deref(),
        )
        .await?;
    info!(user = %user.username, indicator_id = id, "Indicator updated");

    Ok(Json(json!({ "message": "Indicator updated successfully" })))
}

/// DELETE /api/indicators/:id (admin only)
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    state.indicators.delete(id).await?;
    info!(user = %user.username, indicator_id = id, "Indicator deleted");

    Ok(Json(json!({ "message": "Indicator deleted successfully" })))
}
