use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::{self, Identity};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub token: Option<String>,
}

/// POST /api/auth/login - validate admin credentials, issue a session token.
pub async fn login(Json(body): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    let username = body.username.as_deref().unwrap_or_default();
    let password = body.password.as_deref().unwrap_or_default();

    let token = auth::login(username, password)?;
    info!("Administrator logged in");

    Ok(Json(json!({
        "message": "Login successful",
        "token": token,
        "user": Identity {
            username: "admin".to_string(),
            role: "admin".to_string(),
        },
    })))
}

/// POST /api/auth/verify - check a token presented in the request body.
pub async fn verify(Json(body): Json<VerifyRequest>) -> Result<Json<Value>, ApiError> {
    let token = match body.token.as_deref() {
        Some(token) if !token.is_empty() => token,
        _ => return Err(ApiError::bad_request("Token is required")),
    };

    let claims = auth::verify_token(token).map_err(|_| ApiError::unauthorized("Invalid token"))?;

    Ok(Json(json!({
        "valid": true,
        "user": Identity::from(claims),
    })))
}

/// POST /api/auth/logout - stateless no-op; the client discards its token.
pub async fn logout() -> Json<Value> {
    Json(json!({ "message": "Logout successful" }))
}
