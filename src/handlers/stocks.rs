use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::middleware::{AuthUser, MaybeAuthUser};
use crate::models::{CreateStock, Stock, UpdateStock};
use crate::state::AppState;

/// Path ids are numeric; anything unparseable cannot match a row.
fn parse_id(id: &str, what: &'static str) -> Result<i64, ApiError> {
    id.parse().map_err(|_| ApiError::not_found(what))
}

/// GET /api/stocks
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
) -> Result<Json<Vec<Stock>>, ApiError> {
    debug!(admin = user.is_some(), "Listing stocks");
    Ok(Json(state.stocks.list().await?))
}

/// GET /api/stocks/:id
pub async fn get(
    State(state): State<AppState>,
    MaybeAuthUser(_): MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<Json<Stock>, ApiError> {
    let id = parse_id(&id, "Stock not found")?;
    state
        .stocks
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Stock not found"))
}

/// POST /api/stocks (admin only)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateStock>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (symbol, company_name) = payload.validated()?;
    let id = state
        .stocks
        .insert(
            symbol,
            company_name,
            payload.current_price,
            payload.target_price,
            payload.rating.as_deref(),
            payload.notes.as_deref(),
        )
        .await?;
    info!(user = %user.username, %symbol, "Stock created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Stock created successfully", "id": id })),
    ))
}

/// PUT /api/stocks/:id (admin only, full replace; symbol is immutable)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStock>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id, "Stock not found")?;
    let company_name = payload.validated()?;
    state
        .stocks
        .update(
            id,
            company_name,
            payload.current_price,
            payload.target_price,
            payload.rating.as_deref(),
            payload.notes.as_deref(),
        )
        .await?;
    info!(user = %user.username, stock_id = id, "Stock updated");

    Ok(Json(json!({ "message": "Stock updated successfully" })))
}

/// DELETE /api/stocks/:id (admin only)
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id, "Stock not found")?;
    state.stocks.delete(id).await?;
    info!(user = %user.username, stock_id = id, "Stock deleted");

    Ok(Json(json!({ "message": "Stock deleted successfully" })))
}
