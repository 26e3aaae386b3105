use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{validate_jwt, AuthError, Claims};
use crate::error::ApiError;
use crate::server::AppState;

/// Authenticated user context extracted from the JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(request.headers())?;
    let claims = validate_jwt(token, &state.config.security)?;

    let auth_user = AuthUser::from(claims);
    tracing::trace!("Allowing user: {}", auth_user.username);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Take the second whitespace-separated part of the Authorization header.
///
/// The scheme word itself is not checked, so `Bearer <token>` and any other
/// `<word> <token>` pair both yield the token.
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().nth(1))
        .ok_or(AuthError::MissingToken)
}
