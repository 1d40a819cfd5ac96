//! Device entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::condition::DeviceCondition;
use super::status::DeviceStatus;

/// A physical item offered for donation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Device {
    /// Unique device identifier.
    pub id: Uuid,
    /// The donor who owns this device.
    pub donor_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-text description; parsed by the attribute extractor when no
    /// explicit type label was provided.
    pub description: String,
    /// Normalized device-type label (e.g. "Laptop"), if classified.
    pub device_type: Option<String>,
    /// Physical condition.
    pub condition: DeviceCondition,
    /// Number of identical units offered.
    pub quantity: i32,
    /// Opaque image URL references, stored verbatim.
    pub images: Vec<String>,
    /// Availability status.
    pub status: DeviceStatus,
    /// When the device was posted.
    pub created_at: DateTime<Utc>,
    /// When the device was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to post a new device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDevice {
    /// The donor posting the device.
    pub donor_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Device-type label, if the donor supplied one.
    pub device_type: Option<String>,
    /// Physical condition.
    pub condition: DeviceCondition,
    /// Number of identical units.
    pub quantity: i32,
    /// Image URL references.
    pub images: Vec<String>,
}
