//! Voucher issuance, verification, and exactly-once redemption.

pub mod service;
pub mod token;

pub use service::{VoucherService, VoucherVerification};
pub use token::TokenGenerator;
