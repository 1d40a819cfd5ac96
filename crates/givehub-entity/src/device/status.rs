//! Device status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability status of a donated device.
///
/// `Matched` and `Completed` are written exclusively by the transfer
/// lifecycle; `Pending`/`Approved`/`Rejected` belong to the moderation
/// flow that precedes any transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "device_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    /// Submitted by a donor, awaiting moderation.
    Pending,
    /// Approved and available for matching.
    Approved,
    /// Rejected by moderation.
    Rejected,
    /// Reserved by an active transfer.
    Matched,
    /// Handed off; the transfer reached its receipt state.
    Completed,
}

impl DeviceStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Matched => "matched",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
