//! Voucher issuance, verification, and redemption handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::error::ApiError;

use crate::dto::request::IssueVoucherRequest;
use crate::dto::response::VoucherVerificationResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/vouchers
pub async fn issue_voucher(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<IssueVoucherRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let voucher = state
        .voucher_service
        .issue_voucher(auth.context(), req.transfer_id)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": voucher }),
    ))
}

/// GET /api/vouchers/verify/{token}
pub async fn verify_voucher(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(token): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let verification = state.voucher_service.verify_voucher(&token).await?;

    let body = VoucherVerificationResponse {
        voucher: verification.voucher,
        is_valid: verification.is_valid,
    };
    Ok(Json(serde_json::json!({ "success": true, "data": body })))
}

/// POST /api/vouchers/{id}/redeem
///
/// Redemption is independent of the transfer's status update: the school
/// confirms receipt via `PUT /api/transfers/{id}/status` and redeems the
/// voucher separately. Redeeming does not move the transfer to `received`.
pub async fn redeem_voucher(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let voucher = state
        .voucher_service
        .redeem_voucher(auth.context(), id)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": voucher }),
    ))
}
