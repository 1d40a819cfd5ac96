//! # givehub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all GiveHub entities. Cross-row invariants
//! (transfer/device synchronization, exactly-once voucher redemption) are
//! enforced here with transactions and conditional updates.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::create_pool;
