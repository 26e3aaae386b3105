use axum::{
    extract::{Extension, Path, State},
    http::header::LOCATION,
    response::{IntoResponse, Response},
    Json,
};

use crate::database::{models::DistrictInput, service};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::AppState;

use super::json_or_empty;

/// POST /districts
///
/// Replies with confirmation text; the new district's path is in `Location`.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<DistrictInput>,
) -> Result<Response, ApiError> {
    let district_id = service::create_district(&state.pool, &input).await?;
    tracing::info!("District {} created by '{}'", district_id, user.username);

    Ok((
        [(LOCATION, format!("/districts/{}", district_id))],
        "District Successfully Added",
    )
        .into_response())
}

/// GET /districts/:districtId
pub async fn get(State(state): State<AppState>, Path(district_id): Path<i64>) -> Result<Response, ApiError> {
    let found = service::find_district(&state.pool, district_id).await?;
    Ok(json_or_empty(found))
}

/// PUT /districts/:districtId - full replacement, no partial patch
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(district_id): Path<i64>,
    Json(input): Json<DistrictInput>,
) -> Result<&'static str, ApiError> {
    let matched = service::update_district(&state.pool, district_id, &input).await?;
    tracing::info!("District {} updated by '{}' ({} row(s))", district_id, user.username, matched);
    Ok("District Details Updated")
}

/// DELETE /districts/:districtId - succeeds whether or not the row existed
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(district_id): Path<i64>,
) -> Result<&'static str, ApiError> {
    let removed = service::delete_district(&state.pool, district_id).await?;
    tracing::info!("District {} deleted by '{}' ({} row(s))", district_id, user.username, removed);
    Ok("District Removed")
}
