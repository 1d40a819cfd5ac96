//! Transfer status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a device-to-school transfer.
///
/// The legal step sequence is `pending → approved → in_transit →
/// delivered → received`, with `rejected` reachable from `pending`.
/// `rejected` and `received` are terminal. The transition table itself
/// lives in the service layer; this enum only knows which states end the
/// lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transfer_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    /// Proposed, awaiting approval.
    Pending,
    /// Approved; handoff may begin.
    Approved,
    /// Abandoned; the device returns to the pool.
    Rejected,
    /// Physically on its way.
    InTransit,
    /// Dropped off at the school, awaiting confirmation.
    Delivered,
    /// Receipt confirmed by the school. Terminal success state.
    Received,
}

impl TransferStatus {
    /// Whether this status ends the lifecycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Received)
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Received => "received",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransferStatus {
    type Err = givehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "in_transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "received" => Ok(Self::Received),
            _ => Err(givehub_core::AppError::validation(format!(
                "Invalid transfer status: '{s}'"
            ))),
        }
    }
}
