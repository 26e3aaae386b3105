// handlers/public/auth/login.rs - POST /login handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{generate_jwt, verify_password, AuthError, Claims, PasswordError};
use crate::database::service;
use crate::error::ApiError;
use crate::server::AppState;

/// Absent fields read as empty strings, so they fail the user lookup
/// instead of the body extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub jwt_token: String,
}

/// POST /login - Authenticate user and receive JWT token
///
/// Expected Input:
/// ```json
/// { "username": "christopher_phillips", "password": "christy@123" }
/// ```
///
/// Expected Output (Success):
/// ```json
/// { "jwtToken": "eyJhbGciOiJIUzI1NiI..." }
/// ```
///
/// Unknown users get `400 Invalid user`, wrong passwords `400 Invalid password`.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = service::find_user_by_username(&state.pool, &payload.username)
        .await?
        .ok_or_else(|| {
            warn!("Login failed: unknown user '{}'", payload.username);
            AuthError::InvalidUser
        })?;

    match verify_password(payload.password, user.password).await {
        Ok(true) => {}
        Ok(false) => {
            warn!("Login failed: wrong password for '{}'", user.username);
            return Err(AuthError::InvalidPassword.into());
        }
        Err(PasswordError::Bcrypt(e)) => {
            // An unreadable stored hash can never match
            warn!("Login failed: stored hash for '{}' is unusable: {}", user.username, e);
            return Err(AuthError::InvalidPassword.into());
        }
        Err(e) => return Err(e.into()),
    }

    let security = &state.config.security;
    let claims = Claims::new(user.username, security.jwt_expiry_hours);
    let jwt_token = generate_jwt(&claims, security)?;

    info!("Issued token for '{}'", claims.username);
    Ok(Json(LoginResponse { jwt_token }))
}
