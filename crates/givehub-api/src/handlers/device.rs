//! Device submission, listing, and moderation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use givehub_core::error::AppError;

use crate::error::ApiError;
use givehub_entity::device::{CreateDevice, DeviceStatus};
use givehub_entity::user::UserRole;

use crate::dto::request::{CreateDeviceRequest, ModerateDeviceRequest};
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/devices
pub async fn create_device(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateDeviceRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if auth.role != UserRole::Donor {
        return Err(AppError::forbidden("Only donors may offer devices").into());
    }
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // Classify from the free text when the donor left the type blank.
    let device_type = req.device_type.or_else(|| {
        state
            .matching_service
            .extract_attributes(&format!("{} {}", req.name, req.description))
            .device_type
    });

    let device = state
        .device_repo
        .create(&CreateDevice {
            donor_id: auth.user_id,
            name: req.name,
            description: req.description,
            device_type,
            condition: req.condition,
            quantity: req.quantity,
            images: req.images,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": device })))
}

/// GET /api/devices
///
/// Donors see their own devices; administrators may scope to any donor
/// with `?donor_id=`.
pub async fn list_devices(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PaginationParams>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let donor_id = if auth.is_admin() {
        params
            .get("donor_id")
            .ok_or_else(|| AppError::validation("donor_id is required for administrators"))?
            .parse::<Uuid>()
            .map_err(|_| AppError::validation("Invalid donor_id"))?
    } else if auth.role == UserRole::Donor {
        auth.user_id
    } else {
        return Err(AppError::forbidden("Only donors may list devices").into());
    };

    let devices = state
        .device_repo
        .find_by_donor(donor_id, &page.into_page_request())
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": devices }),
    ))
}

/// GET /api/devices/{id}
///
/// Devices awaiting or failing moderation are visible only to their
/// donor and administrators.
pub async fn get_device(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let device = state
        .device_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Device not found"))?;

    let moderated_out = matches!(
        device.status,
        DeviceStatus::Pending | DeviceStatus::Rejected
    );
    if moderated_out && !auth.is_admin() && auth.user_id != device.donor_id {
        return Err(AppError::not_found("Device not found").into());
    }

    Ok(Json(serde_json::json!({ "success": true, "data": device })))
}

/// PUT /api/devices/{id}/status — admin moderation.
pub async fn moderate_device(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ModerateDeviceRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !auth.is_admin() {
        return Err(AppError::forbidden(
            "Only administrators may moderate devices",
        ).into());
    }
    if !matches!(req.status, DeviceStatus::Approved | DeviceStatus::Rejected) {
        return Err(AppError::validation(
            "Moderation status must be 'approved' or 'rejected'",
        ).into());
    }

    let device = state
        .device_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Device not found"))?;
    if device.status != DeviceStatus::Pending {
        return Err(AppError::validation(
            "Only pending devices can be moderated",
        ).into());
    }

    let updated = state
        .device_repo
        .set_status(id, req.status)
        .await?
        .ok_or_else(|| AppError::not_found("Device not found"))?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": updated }),
    ))
}
