//! User profile entity model.
//!
//! Profile CRUD itself lives outside this core; the profile row is read
//! here for two things only: the verification flag that gates transfer
//! creation and the optional coordinates used by the match scorer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A donor, school, or administrator profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: Uuid,
    /// The user's role.
    pub role: UserRole,
    /// Display name.
    pub display_name: String,
    /// Whether the profile has been verified by an administrator.
    pub is_verified: bool,
    /// Latitude of the user's registered location, if known.
    pub latitude: Option<f64>,
    /// Longitude of the user's registered location, if known.
    pub longitude: Option<f64>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Return the registered coordinates as a `(latitude, longitude)` pair,
    /// or `None` when either component is missing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
