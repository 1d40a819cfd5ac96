//! HTTP request handlers, one module per resource.

pub mod device;
pub mod health;
pub mod matching;
pub mod need;
pub mod transfer;
pub mod voucher;
