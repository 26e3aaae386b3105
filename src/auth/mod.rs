use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

/// Token payload. `exp` is only present when an expiry is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn new(username: impl Into<String>, expiry_hours: Option<u64>) -> Self {
        let now = Utc::now();
        let exp = expiry_hours.map(|hours| (now + Duration::hours(hours as i64)).timestamp());

        Self {
            username: username.into(),
            iat: now.timestamp(),
            exp,
        }
    }
}

/// Failures surfaced to clients by login and the bearer token gate
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid user")]
    InvalidUser,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Invalid JWT Token")]
    MissingToken,

    #[error("Invalid JWT Token")]
    InvalidToken,
}

impl AuthError {
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidUser | AuthError::InvalidPassword => 400,
            AuthError::MissingToken | AuthError::InvalidToken => 401,
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("password hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub fn generate_jwt(claims: &Claims, security: &SecurityConfig) -> Result<String, JwtError> {
    let secret = &security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Verify the token signature and decode its claims.
///
/// With no expiry configured, tokens carry no `exp` and none is demanded.
/// With an expiry configured, `exp` is both required and checked.
pub fn validate_jwt(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    let secret = &security.jwt_secret;

    if secret.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    if security.jwt_expiry_hours.is_some() {
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_exp = true;
    } else {
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
    }

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!("JWT rejected: {}", e);
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Both bcrypt helpers run on the blocking pool.
pub async fn hash_password(password: String, cost: u32) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let matched = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn security(expiry_hours: Option<u64>) -> SecurityConfig {
        let mut security = AppConfig::development().security;
        security.jwt_secret = "test-secret-key-12345".to_string();
        security.jwt_expiry_hours = expiry_hours;
        security
    }

    #[test]
    fn token_round_trip_without_expiry() {
        let security = security(None);
        let claims = Claims::new("christopher_phillips", None);
        assert!(claims.exp.is_none());

        let token = generate_jwt(&claims, &security).unwrap();
        let decoded = validate_jwt(&token, &security).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn token_with_expiry_carries_exp() {
        let security = security(Some(2));
        let claims = Claims::new("admin", security.jwt_expiry_hours);
        let token = generate_jwt(&claims, &security).unwrap();

        let decoded = validate_jwt(&token, &security).unwrap();
        let exp = decoded.exp.expect("exp claim");
        assert!(exp > Utc::now().timestamp());
    }

    #[test]
    fn expiring_config_rejects_tokens_without_exp() {
        let token = generate_jwt(&Claims::new("admin", None), &security(None)).unwrap();
        assert_eq!(validate_jwt(&token, &security(Some(1))), Err(AuthError::InvalidToken));
    }

    #[test]
    fn expired_token_is_rejected() {
        let security = security(Some(1));
        let claims = Claims {
            username: "admin".to_string(),
            iat: Utc::now().timestamp() - 7200,
            exp: Some(Utc::now().timestamp() - 3600),
        };
        let token = generate_jwt(&claims, &security).unwrap();
        assert_eq!(validate_jwt(&token, &security), Err(AuthError::InvalidToken));
    }

    #[test]
    fn different_secrets_reject() {
        let token = generate_jwt(&Claims::new("admin", None), &security(None)).unwrap();
        let mut other = security(None);
        other.jwt_secret = "another-secret".to_string();
        assert_eq!(validate_jwt(&token, &other), Err(AuthError::InvalidToken));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert_eq!(validate_jwt("invalid.token.here", &security(None)), Err(AuthError::InvalidToken));
    }

    #[test]
    fn empty_secret_refuses_to_sign() {
        let mut security = security(None);
        security.jwt_secret.clear();
        assert!(matches!(
            generate_jwt(&Claims::new("admin", None), &security),
            Err(JwtError::InvalidSecret)
        ));
    }

    #[test]
    fn auth_error_statuses() {
        assert_eq!(AuthError::InvalidUser.status_code(), 400);
        assert_eq!(AuthError::InvalidPassword.status_code(), 400);
        assert_eq!(AuthError::MissingToken.status_code(), 401);
        assert_eq!(AuthError::InvalidToken.status_code(), 401);
        assert_eq!(AuthError::InvalidUser.to_string(), "Invalid user");
        assert_eq!(AuthError::MissingToken.to_string(), "Invalid JWT Token");
    }

    #[tokio::test]
    async fn bcrypt_verify_matches_only_original_password() {
        let hash = hash_password("christy@123".to_string(), 4).await.unwrap();
        assert!(verify_password("christy@123".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrong".to_string(), hash).await.unwrap());
    }
}
