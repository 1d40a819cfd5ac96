//! Voucher entity and status enum.

pub mod model;
pub mod status;

pub use model::Voucher;
pub use status::VoucherStatus;
