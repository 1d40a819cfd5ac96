//! Transfer entity and status enum.

pub mod model;
pub mod status;

pub use model::{CreateTransfer, Transfer};
pub use status::TransferStatus;
