use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

use crate::database::{models, service};
use crate::error::ApiError;
use crate::server::AppState;

use super::json_or_empty;

/// GET /states - every state ordered by id
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<models::State>>, ApiError> {
    let states = service::list_states(&state.pool).await?;
    Ok(Json(states))
}

/// GET /states/:stateId
pub async fn get(State(state): State<AppState>, Path(state_id): Path<i64>) -> Result<Response, ApiError> {
    let found = service::find_state(&state.pool, state_id).await?;
    Ok(json_or_empty(found))
}

/// GET /states/:stateId/stats - summed counters over the state's districts
pub async fn stats(
    State(state): State<AppState>,
    Path(state_id): Path<i64>,
) -> Result<Json<models::StateStats>, ApiError> {
    let stats = service::state_stats(&state.pool, state_id).await?;
    Ok(Json(stats))
}
