use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config;

/// JWT claims for the single administrator session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Admin claims expiring `expiry_hours` from now.
    pub fn admin(expiry_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            username: "admin".to_string(),
            role: "admin".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiry_hours)).timestamp(),
        }
    }
}

/// The identity embedded in a token, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub username: String,
    pub role: String,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            role: claims.role,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),
}

/// Issue a signed token for the given claims.
pub fn generate_token(claims: &Claims) -> Result<String, AuthError> {
    let secret = &config::config().security.jwt_secret;
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

/// Verify a token's signature and expiry, returning its claims.
pub fn verify_token(token: &str) -> Result<Claims, AuthError> {
    let secret = &config::config().security.jwt_secret;
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}

/// Validate a username/password pair against the configured administrator
/// account and issue a session token.
///
/// The values are compared as SHA-256 digests rather than raw strings. The
/// credentials still come from process configuration, not the database.
pub fn login(username: &str, password: &str) -> Result<String, AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    let security = &config::config().security;
    let username_ok = digest_eq(username, &security.admin_username);
    let password_ok = digest_eq(password, &security.admin_password);
    if !username_ok || !password_ok {
        return Err(AuthError::InvalidCredentials);
    }

    let claims = Claims::admin(security.jwt_expiry_hours);
    generate_token(&claims)
}

fn digest_eq(presented: &str, expected: &str) -> bool {
    Sha256::digest(presented.as_bytes()) == Sha256::digest(expected.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let claims = Claims::admin(24);
        let token = generate_token(&claims).unwrap();
        let decoded = verify_token(&token).unwrap();
        assert_eq!(decoded.username, "admin");
        assert_eq!(decoded.role, "admin");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn tampered_signature_fails_verification() {
        let token = generate_token(&Claims::admin(24)).unwrap();
        // Flip a character in the signature segment.
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        assert_eq!(parts.len(), 3);
        let sig = parts[2].clone();
        let flipped = if sig.starts_with('A') { "B" } else { "A" };
        parts[2] = format!("{}{}", flipped, &sig[1..]);
        let tampered = parts.join(".");

        assert!(matches!(
            verify_token(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_fails_verification() {
        let claims = Claims::admin(-1);
        let token = generate_token(&claims).unwrap();
        assert!(matches!(verify_token(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn login_rejects_wrong_password() {
        assert!(matches!(
            login("admin", "nope"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn login_rejects_empty_fields() {
        assert!(matches!(
            login("", "admin123"),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[test]
    fn login_with_default_credentials_succeeds() {
        let token = login("admin", "admin123").unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(Identity::from(claims).role, "admin");
    }
}
