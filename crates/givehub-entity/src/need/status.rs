//! Need status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a school's need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "need_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NeedStatus {
    /// Accepting matches.
    Open,
    /// Satisfied by one or more completed transfers.
    Fulfilled,
    /// Withdrawn by the school.
    Closed,
}

impl NeedStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Fulfilled => "fulfilled",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for NeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
