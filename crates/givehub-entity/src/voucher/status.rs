//! Voucher status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored status of a chain-of-custody voucher.
///
/// The stored value is monotonic: `active → used` is the only transition
/// a writer may perform. Expiry is computed from the timestamp at read
/// time, so a stored `active` can still be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "voucher_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VoucherStatus {
    /// Issued and not yet redeemed.
    Active,
    /// Redeemed exactly once.
    Used,
    /// Marked expired (informational; expiry is always recomputed).
    Expired,
}

impl VoucherStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Used => "used",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for VoucherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
