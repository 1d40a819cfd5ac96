//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available on the platform.
///
/// Identity and token verification happen upstream; by the time a role
/// reaches this crate it has already been authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Platform administrator: moderates devices and can drive any
    /// transfer transition.
    Admin,
    /// A donor offering devices.
    Donor,
    /// A school posting needs and receiving devices.
    School,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Donor => "donor",
            Self::School => "school",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = givehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "donor" => Ok(Self::Donor),
            "school" => Ok(Self::School),
            _ => Err(givehub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, donor, school"
            ))),
        }
    }
}
