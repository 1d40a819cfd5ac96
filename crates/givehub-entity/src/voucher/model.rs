//! Voucher entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::VoucherStatus;

/// A single-use, time-bounded proof that a transfer's device changed
/// physical custody. At most one voucher exists per transfer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Voucher {
    /// Unique voucher identifier.
    pub id: Uuid,
    /// The transfer this voucher proves (unique).
    pub transfer_id: Uuid,
    /// Opaque redemption token.
    pub token: String,
    /// Stored status.
    pub status: VoucherStatus,
    /// When the voucher stops being redeemable.
    pub expires_at: DateTime<Utc>,
    /// When the voucher was issued.
    pub created_at: DateTime<Utc>,
    /// When the voucher was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Voucher {
    /// Whether the voucher is past its expiry at `now`.
    ///
    /// Computed from the timestamp regardless of the stored status.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the voucher can still be redeemed at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.status == VoucherStatus::Active && !self.is_expired_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn voucher(status: VoucherStatus, expires_in: Duration) -> Voucher {
        let now = Utc::now();
        Voucher {
            id: Uuid::new_v4(),
            transfer_id: Uuid::new_v4(),
            token: "token".to_string(),
            status,
            expires_at: now + expires_in,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_active_unexpired_is_valid() {
        let v = voucher(VoucherStatus::Active, Duration::hours(1));
        assert!(v.is_valid_at(Utc::now()));
    }

    #[test]
    fn test_stored_active_past_expiry_is_invalid() {
        let v = voucher(VoucherStatus::Active, Duration::hours(-1));
        assert!(!v.is_valid_at(Utc::now()));
        assert!(v.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_used_is_invalid() {
        let v = voucher(VoucherStatus::Used, Duration::hours(1));
        assert!(!v.is_valid_at(Utc::now()));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let v = voucher(VoucherStatus::Active, Duration::zero());
        assert!(v.is_expired_at(v.expires_at));
    }
}
