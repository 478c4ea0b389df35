use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use portfolio_api::config::{self, DatabaseConfig};
use portfolio_api::db;
use portfolio_api::routes;
use portfolio_api::state::AppState;

/// Build an app over a fresh in-memory store with the schema applied.
pub async fn test_app() -> Result<Router> {
    build_app(false).await
}

/// Same, but with the example seed rows inserted.
pub async fn seeded_app() -> Result<Router> {
    build_app(true).await
}

async fn build_app(seed: bool) -> Result<Router> {
    let db_config = DatabaseConfig {
        path: String::new(),
        in_memory: true,
        max_connections: 1,
    };
    let pool = db::connect(&db_config).await.context("connect")?;
    db::init_schema(&pool).await.context("init schema")?;
    if seed {
        db::seed_initial_data(&pool).await.context("seed")?;
    }
    Ok(routes::app(config::config(), AppState::new(pool)))
}

/// Send one request through the router, returning status and parsed body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .context("router call failed")?;

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).context("response was not JSON")?
    };

    Ok((status, value))
}

/// Log in with the default admin credentials and return the bearer token.
pub async fn login(app: &Router) -> Result<String> {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({ "username": "admin", "password": "admin123" })),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::OK, "login failed: {} {}", status, body);

    body["token"]
        .as_str()
        .map(String::from)
        .context("login response missing token")
}
