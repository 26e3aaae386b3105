// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Security Level: JWT Authentication Required
// Middleware: jwt_auth_middleware, which injects `AuthUser` into extensions
//
// Handlers map one route to one statement in `database::service` and return
// rows as-is. A lookup that finds nothing answers 200 with an empty body
// rather than 404.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub mod districts;
pub mod states;

fn json_or_empty<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => StatusCode::OK.into_response(),
    }
}
