//! Transfer lifecycle: the pure transition rules and the service that
//! applies them against the store.

pub mod lifecycle;
pub mod service;

pub use lifecycle::{Actor, allowed_targets, device_status_for, is_valid_transition};
pub use service::{TransferService, UpdateStatus};
