//! # givehub-entity
//!
//! Domain entity models for GiveHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod device;
pub mod matching;
pub mod need;
pub mod transfer;
pub mod user;
pub mod voucher;
