//! Device entity, condition, and status enums.

pub mod condition;
pub mod model;
pub mod status;

pub use condition::DeviceCondition;
pub use model::{CreateDevice, Device};
pub use status::DeviceStatus;
