//! Match ranking handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::error::ApiError;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/needs/{id}/matches
pub async fn matches_for_need(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let candidates = state
        .matching_service
        .rank_devices_for_need(auth.context(), id)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": candidates }),
    ))
}

/// GET /api/devices/{id}/matches
pub async fn matches_for_device(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let candidates = state
        .matching_service
        .rank_needs_for_device(auth.context(), id)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": candidates }),
    ))
}
