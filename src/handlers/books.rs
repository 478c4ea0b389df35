use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::middleware::{AuthUser, MaybeAuthUser};
use crate::models::{Book, BookPayload};
use crate::state::AppState;

fn parse_id(id: &str) -> Result<i64, ApiError> {
    id.parse().map_err(|_| ApiError::not_found("Book not found"))
}

/// GET /api/books
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
) -> Result<Json<Vec<Book>>, ApiError> {
    debug!(admin = user.is_some(), "Listing books");
    Ok(Json(state.books.list().await?))
}

/// GET /api/books/:id
pub async fn get(
    State(state): State<AppState>,
    MaybeAuthUser(_): MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    state
        .books
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Book not found"))
}

/// POST /api/books (admin only)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (title, author) = payload.validated()?;
    let id = state
        .books
        .insert(
            title,
            author,
            payload.description.as_deref(),
            payload.cover_image.as_deref(),
            payload.rating,
            payload.status.as_deref(),
        )
        .await?;
    info!(user = %user.username, %title, "Book created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Book created successfully", "id": id })),
    ))
}

/// PUT /api/books/:id (admin only, full replace)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let (title, author) = payload.validated()?;
    state
        .books
        .update(
            id,
            title,
            author,
            payload.description.as_deref(),
            payload.cover_image.as_deref(),
            payload.rating,
            payload.status.as_deref(),
        )
        .await?;
    info!(user = %user.username, book_id = id, "Book updated");

    Ok(Json(json!({ "message": "Book updated successfully" })))
}

/// DELETE /api/books/:id (admin only)
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    state.books.delete(id).await?;
    info!(user = %user.username, book_id = id, "Book deleted");

    Ok(Json(json!({ "message": "Book deleted successfully" })))
}
