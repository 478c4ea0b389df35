use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::auth::{self, Claims};
use crate::error::ApiError;

/// Authenticated administrator context extracted from a bearer token.
///
/// Used as an axum extractor: handlers that take `AuthUser` reject requests
/// without a valid token, handlers that take `MaybeAuthUser` proceed either
/// way. Both modes share the same extraction path.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Optional-auth variant: `None` when the token is absent or invalid.
#[derive(Clone, Debug)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

fn authenticate(parts: &Parts) -> Result<AuthUser, ApiError> {
    let auth_header = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Access token required"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    let token = extract_bearer_token(auth_str).map_err(ApiError::unauthorized)?;

    let claims = auth::verify_token(&token)
        .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

    Ok(AuthUser::from(claims))
}

/// Extract the token portion of a "Bearer <token>" header value.
fn extract_bearer_token(auth_header: &str) -> Result<String, String> {
    const BEARER_PREFIX: &str = "Bearer ";

    let token = auth_header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| "Authorization header must use Bearer token format".to_string())?
        .trim();

    if token.is_empty() {
        return Err("Empty bearer token".to_string());
    }

    Ok(token.to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(authenticate(parts).ok()))
    }
}
