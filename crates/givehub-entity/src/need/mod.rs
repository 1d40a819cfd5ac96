//! Need entity, priority, and status enums.

pub mod model;
pub mod priority;
pub mod status;

pub use model::{CreateNeed, Need};
pub use priority::NeedPriority;
pub use status::NeedStatus;
