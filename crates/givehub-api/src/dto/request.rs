//! Request DTOs with validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use givehub_entity::device::{DeviceCondition, DeviceStatus};
use givehub_entity::need::NeedPriority;
use givehub_entity::transfer::TransferStatus;

/// Donate-a-device request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDeviceRequest {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Free-text description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Device-type label; extracted from the description when omitted.
    pub device_type: Option<String>,
    /// Physical condition.
    pub condition: DeviceCondition,
    /// Number of units offered.
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    /// Image URLs, stored verbatim.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Admin device moderation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerateDeviceRequest {
    /// The moderation outcome: `approved` or `rejected`.
    pub status: DeviceStatus,
}

/// Post-a-need request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNeedRequest {
    /// Requested device-type label.
    #[validate(length(min = 1, message = "Device type is required"))]
    pub device_type: String,
    /// Number of units needed.
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Specification requirements (key → value strings).
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    /// Minimum acceptable condition, if any.
    pub min_condition: Option<DeviceCondition>,
    /// Urgency of the need.
    pub priority: NeedPriority,
}

/// Propose-a-transfer request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransferRequest {
    /// The device to hand off.
    pub device_id: Uuid,
    /// The receiving school.
    pub school_id: Uuid,
    /// Optional message to the school.
    pub message: Option<String>,
}

/// Transfer status update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTransferStatusRequest {
    /// The target status.
    pub status: TransferStatus,
    /// Notes to record alongside the update.
    pub notes: Option<String>,
    /// Receipt-confirmation image URLs to append.
    pub receipt_images: Option<Vec<String>>,
}

/// Voucher issuance request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueVoucherRequest {
    /// The transfer to issue a voucher for.
    pub transfer_id: Uuid,
}

/// Query parameters accepted by the transfer list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransferListQuery {
    /// Restrict to a device.
    pub device_id: Option<Uuid>,
    /// Restrict to a donor (admins only; participants are auto-scoped).
    pub donor_id: Option<Uuid>,
    /// Restrict to a school (admins only; participants are auto-scoped).
    pub school_id: Option<Uuid>,
    /// Restrict to a status.
    pub status: Option<TransferStatus>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub per_page: Option<u64>,
}
