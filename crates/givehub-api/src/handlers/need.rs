//! Need submission and listing handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use givehub_core::error::AppError;

use crate::error::ApiError;
use givehub_entity::need::CreateNeed;
use givehub_entity::user::UserRole;

use crate::dto::request::CreateNeedRequest;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/needs
pub async fn create_need(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateNeedRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if auth.role != UserRole::School {
        return Err(AppError::forbidden("Only schools may post needs").into());
    }
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let need = state
        .need_repo
        .create(&CreateNeed {
            school_id: auth.user_id,
            device_type: req.device_type,
            quantity: req.quantity,
            description: req.description,
            specifications: req.specifications,
            min_condition: req.min_condition,
            priority: req.priority,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": need })))
}

/// GET /api/needs
///
/// Schools see their own needs; administrators may scope to any school
/// with `?school_id=`.
pub async fn list_needs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PaginationParams>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let school_id = if auth.is_admin() {
        params
            .get("school_id")
            .ok_or_else(|| AppError::validation("school_id is required for administrators"))?
            .parse::<Uuid>()
            .map_err(|_| AppError::validation("Invalid school_id"))?
    } else if auth.role == UserRole::School {
        auth.user_id
    } else {
        return Err(AppError::forbidden("Only schools may list needs").into());
    };

    let needs = state
        .need_repo
        .find_by_school(school_id, &page.into_page_request())
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": needs })))
}

/// GET /api/needs/{id}
pub async fn get_need(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let need = state
        .need_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Need not found"))?;

    Ok(Json(serde_json::json!({ "success": true, "data": need })))
}
