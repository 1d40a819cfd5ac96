//! Transfer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TransferStatus;

/// The tracked handoff of one device to one school.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transfer {
    /// Unique transfer identifier.
    pub id: Uuid,
    /// The device being transferred.
    pub device_id: Uuid,
    /// The donor side of the handoff.
    pub donor_id: Uuid,
    /// The receiving school.
    pub school_id: Uuid,
    /// Optional message from the creator.
    pub message: Option<String>,
    /// Current lifecycle status.
    pub status: TransferStatus,
    /// Free-form notes accumulated by status updates.
    pub notes: Option<String>,
    /// Opaque receipt-confirmation image URLs, stored verbatim.
    pub receipt_images: Vec<String>,
    /// When the transfer was proposed.
    pub created_at: DateTime<Utc>,
    /// When the transfer was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to propose a new transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransfer {
    /// The device to hand off.
    pub device_id: Uuid,
    /// The donor who owns the device.
    pub donor_id: Uuid,
    /// The receiving school.
    pub school_id: Uuid,
    /// Optional message.
    pub message: Option<String>,
}
