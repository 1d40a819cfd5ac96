//! Pure transfer-lifecycle rules: the transition table, the role policy,
//! and the transfer→device status synchronization mapping.
//!
//! Everything here is a total function over enums so it can be tested
//! exhaustively without a database.

use givehub_entity::device::DeviceStatus;
use givehub_entity::transfer::TransferStatus;
use givehub_entity::user::UserRole;

/// How the acting user relates to a specific transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// An administrator (any transfer).
    Admin,
    /// The donor who owns the transfer.
    OwningDonor,
    /// The school that owns the transfer.
    OwningSchool,
    /// Anyone else.
    Other,
}

impl Actor {
    /// Classifies a user against a transfer's participants.
    pub fn classify(
        role: UserRole,
        user_id: uuid::Uuid,
        donor_id: uuid::Uuid,
        school_id: uuid::Uuid,
    ) -> Self {
        match role {
            UserRole::Admin => Actor::Admin,
            UserRole::Donor if user_id == donor_id => Actor::OwningDonor,
            UserRole::School if user_id == school_id => Actor::OwningSchool,
            _ => Actor::Other,
        }
    }

    /// Whether this actor may request the given target status.
    ///
    /// Administrators may set anything; the owning donor moves the
    /// physical handoff forward; the owning school confirms receipt.
    pub fn may_set(self, target: TransferStatus) -> bool {
        match self {
            Actor::Admin => true,
            Actor::OwningDonor => {
                matches!(target, TransferStatus::InTransit | TransferStatus::Delivered)
            }
            Actor::OwningSchool => target == TransferStatus::Received,
            Actor::Other => false,
        }
    }
}

/// Statuses reachable in one step from the given status.
///
/// Terminal statuses (`rejected`, `received`) allow nothing.
pub fn allowed_targets(current: TransferStatus) -> &'static [TransferStatus] {
    match current {
        TransferStatus::Pending => &[TransferStatus::Approved, TransferStatus::Rejected],
        TransferStatus::Approved => &[TransferStatus::InTransit],
        TransferStatus::InTransit => &[TransferStatus::Delivered],
        TransferStatus::Delivered => &[TransferStatus::Received],
        TransferStatus::Rejected | TransferStatus::Received => &[],
    }
}

/// Whether `to` is an immediate successor of `from` in the lifecycle.
pub fn is_valid_transition(from: TransferStatus, to: TransferStatus) -> bool {
    allowed_targets(from).contains(&to)
}

/// The device status implied by a transfer status.
///
/// `rejected` returns the device to the matching pool; `received`
/// completes it; every other status keeps it reserved. The mapping is
/// fixed for compatibility with existing data.
pub fn device_status_for(status: TransferStatus) -> DeviceStatus {
    match status {
        TransferStatus::Rejected => DeviceStatus::Approved,
        TransferStatus::Received => DeviceStatus::Completed,
        TransferStatus::Pending
        | TransferStatus::Approved
        | TransferStatus::InTransit
        | TransferStatus::Delivered => DeviceStatus::Matched,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    const ALL_STATUSES: [TransferStatus; 6] = [
        TransferStatus::Pending,
        TransferStatus::Approved,
        TransferStatus::Rejected,
        TransferStatus::InTransit,
        TransferStatus::Delivered,
        TransferStatus::Received,
    ];

    #[test]
    fn test_happy_path_is_a_chain() {
        assert!(is_valid_transition(
            TransferStatus::Pending,
            TransferStatus::Approved
        ));
        assert!(is_valid_transition(
            TransferStatus::Approved,
            TransferStatus::InTransit
        ));
        assert!(is_valid_transition(
            TransferStatus::InTransit,
            TransferStatus::Delivered
        ));
        assert!(is_valid_transition(
            TransferStatus::Delivered,
            TransferStatus::Received
        ));
    }

    #[test]
    fn test_rejection_only_from_pending() {
        for from in ALL_STATUSES {
            let allowed = is_valid_transition(from, TransferStatus::Rejected);
            assert_eq!(allowed, from == TransferStatus::Pending, "from {from:?}");
        }
    }

    #[test]
    fn test_terminal_statuses_allow_nothing() {
        assert!(allowed_targets(TransferStatus::Rejected).is_empty());
        assert!(allowed_targets(TransferStatus::Received).is_empty());
    }

    #[test]
    fn test_no_skipping_steps() {
        assert!(!is_valid_transition(
            TransferStatus::Pending,
            TransferStatus::Delivered
        ));
        assert!(!is_valid_transition(
            TransferStatus::Approved,
            TransferStatus::Received
        ));
        assert!(!is_valid_transition(
            TransferStatus::Pending,
            TransferStatus::Received
        ));
    }

    #[test]
    fn test_no_self_transitions() {
        for status in ALL_STATUSES {
            assert!(!is_valid_transition(status, status), "{status:?}");
        }
    }

    #[test]
    fn test_admin_may_set_anything() {
        for target in ALL_STATUSES {
            assert!(Actor::Admin.may_set(target), "{target:?}");
        }
    }

    #[test]
    fn test_donor_moves_handoff_forward_only() {
        assert!(Actor::OwningDonor.may_set(TransferStatus::InTransit));
        assert!(Actor::OwningDonor.may_set(TransferStatus::Delivered));
        assert!(!Actor::OwningDonor.may_set(TransferStatus::Approved));
        assert!(!Actor::OwningDonor.may_set(TransferStatus::Rejected));
        assert!(!Actor::OwningDonor.may_set(TransferStatus::Received));
    }

    #[test]
    fn test_school_confirms_receipt_only() {
        assert!(Actor::OwningSchool.may_set(TransferStatus::Received));
        for target in ALL_STATUSES {
            if target != TransferStatus::Received {
                assert!(!Actor::OwningSchool.may_set(target), "{target:?}");
            }
        }
    }

    #[test]
    fn test_outsiders_may_set_nothing() {
        for target in ALL_STATUSES {
            assert!(!Actor::Other.may_set(target), "{target:?}");
        }
    }

    #[test]
    fn test_classify_matches_ownership() {
        let donor = Uuid::new_v4();
        let school = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        assert_eq!(
            Actor::classify(UserRole::Admin, stranger, donor, school),
            Actor::Admin
        );
        assert_eq!(
            Actor::classify(UserRole::Donor, donor, donor, school),
            Actor::OwningDonor
        );
        assert_eq!(
            Actor::classify(UserRole::School, school, donor, school),
            Actor::OwningSchool
        );
        assert_eq!(
            Actor::classify(UserRole::Donor, stranger, donor, school),
            Actor::Other
        );
        assert_eq!(
            Actor::classify(UserRole::School, donor, donor, school),
            Actor::Other
        );
    }

    #[test]
    fn test_device_sync_mapping_is_fixed() {
        assert_eq!(
            device_status_for(TransferStatus::Approved),
            DeviceStatus::Matched
        );
        assert_eq!(
            device_status_for(TransferStatus::Rejected),
            DeviceStatus::Approved
        );
        assert_eq!(
            device_status_for(TransferStatus::Received),
            DeviceStatus::Completed
        );
        assert_eq!(
            device_status_for(TransferStatus::InTransit),
            DeviceStatus::Matched
        );
        assert_eq!(
            device_status_for(TransferStatus::Delivered),
            DeviceStatus::Matched
        );
        assert_eq!(
            device_status_for(TransferStatus::Pending),
            DeviceStatus::Matched
        );
    }
}
