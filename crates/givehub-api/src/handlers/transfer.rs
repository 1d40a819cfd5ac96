//! Transfer lifecycle handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use crate::error::ApiError;
use givehub_core::types::pagination::PageRequest;
use givehub_database::repositories::TransferFilter;
use givehub_service::transfer::UpdateStatus;

use crate::dto::request::{CreateTransferRequest, TransferListQuery, UpdateTransferStatusRequest};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/transfers
pub async fn create_transfer(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTransferRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let transfer = state
        .transfer_service
        .create_transfer(auth.context(), req.device_id, req.school_id, req.message)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": transfer }),
    ))
}

/// GET /api/transfers
pub async fn list_transfers(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TransferListQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let filter = TransferFilter {
        device_id: query.device_id,
        donor_id: query.donor_id,
        school_id: query.school_id,
        status: query.status,
    };
    let page = PageRequest::new(query.page.unwrap_or(1), query.per_page.unwrap_or(25));

    let transfers = state
        .transfer_service
        .list_transfers(auth.context(), filter, &page)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": transfers }),
    ))
}

/// GET /api/transfers/{id}
pub async fn get_transfer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let transfer = state.transfer_service.get_transfer(auth.context(), id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": transfer }),
    ))
}

/// PUT /api/transfers/{id}/status
pub async fn update_transfer_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTransferStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let transfer = state
        .transfer_service
        .update_status(
            auth.context(),
            id,
            UpdateStatus {
                status: req.status,
                notes: req.notes,
                receipt_images: req.receipt_images,
            },
        )
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": transfer }),
    ))
}
