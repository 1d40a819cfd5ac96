//! Request context carrying the authenticated actor into service calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use givehub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Authentication happens upstream (external to this core); the gateway
/// hands over a verified user ID and role, and every service method
/// receives them through this context so that it knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
