//! Need entity model.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::device::DeviceCondition;

use super::priority::NeedPriority;
use super::status::NeedStatus;

/// A school's request for devices.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Need {
    /// Unique need identifier.
    pub id: Uuid,
    /// The school that posted this need.
    pub school_id: Uuid,
    /// Requested device-type label (e.g. "Laptop").
    pub device_type: String,
    /// Number of devices requested.
    pub quantity: i32,
    /// Free-text description of the need.
    pub description: String,
    /// Key→value specification map (RAM, Storage, …). Unrecognized keys
    /// are kept verbatim.
    pub specifications: Json<BTreeMap<String, String>>,
    /// Minimum acceptable device condition, if any.
    pub min_condition: Option<DeviceCondition>,
    /// Urgency of the need.
    pub priority: NeedPriority,
    /// Lifecycle status.
    pub status: NeedStatus,
    /// When the need was posted.
    pub created_at: DateTime<Utc>,
    /// When the need was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to post a new need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNeed {
    /// The school posting the need.
    pub school_id: Uuid,
    /// Requested device-type label.
    pub device_type: String,
    /// Number of devices requested.
    pub quantity: i32,
    /// Free-text description.
    pub description: String,
    /// Specification map.
    pub specifications: BTreeMap<String, String>,
    /// Minimum acceptable condition.
    pub min_condition: Option<DeviceCondition>,
    /// Urgency.
    pub priority: NeedPriority,
}
