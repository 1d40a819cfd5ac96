//! User profile entity and role enum.

pub mod model;
pub mod role;

pub use model::UserProfile;
pub use role::UserRole;
