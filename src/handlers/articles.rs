use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::middleware::{AuthUser, MaybeAuthUser};
use crate::models::{Article, CreateArticle, UpdateArticle};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ArticlesQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// GET /api/articles?category=&search=
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    Query(query): Query<ArticlesQuery>,
) -> Result<Json<Vec<Article>>, ApiError> {
    debug!(admin = user.is_some(), "Listing articles");
    // An empty query value means "no filter", same as an absent parameter.
    let category = query.category.as_deref().filter(|s| !s.is_empty());
    let search = query.search.as_deref().filter(|s| !s.is_empty());
    let articles = state.articles.list(category, search).await?;
    Ok(Json(articles))
}

/// GET /api/articles/:id
pub async fn get(
    State(state): State<AppState>,
    MaybeAuthUser(_): MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    state
        .articles
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Article not found"))
}

/// POST /api/articles (admin only)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateArticle>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (id, title, category, content, date, tags_json) = payload.validated()?;
    state
        .articles
        .insert(id, title, category, content, date, &tags_json)
        .await?;
    info!(user = %user.username, article_id = %id, "Article created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Article created successfully", "id": id })),
    ))
}

/// PUT /api/articles/:id (admin only, full replace)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateArticle>,
) -> Result<Json<Value>, ApiError> {
    let (title, category, content, date, tags_json) = payload.validated()?;
    state
        .articles
        .update(&id, title, category, content, date, &tags_json)
        .await?;
    info!(user = %user.username, article_id = %id, "Article updated");

    Ok(Json(json!({ "message": "Article updated successfully" })))
}

/// DELETE /api/articles/:id (admin only)
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.articles.delete(&id).await?;
    info!(user = %user.username, article_id = %id, "Article deleted");

    Ok(Json(json!({ "message": "Article deleted successfully" })))
}
