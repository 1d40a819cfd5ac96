//! Need priority enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency of a school's need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "need_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NeedPriority {
    /// No particular urgency.
    Low,
    /// Would help soon.
    Medium,
    /// Needed for the current term.
    High,
    /// Blocking classroom activity.
    Urgent,
}

impl NeedPriority {
    /// Score contribution when ranking devices for this need.
    pub fn weight(&self) -> i32 {
        match self {
            Self::Urgent => 20,
            Self::High => 15,
            Self::Medium => 10,
            Self::Low => 5,
        }
    }

    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for NeedPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NeedPriority {
    type Err = givehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(givehub_core::AppError::validation(format!(
                "Invalid priority: '{s}'. Expected one of: low, medium, high, urgent"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_increase_with_urgency() {
        assert!(NeedPriority::Urgent.weight() > NeedPriority::High.weight());
        assert!(NeedPriority::High.weight() > NeedPriority::Medium.weight());
        assert!(NeedPriority::Medium.weight() > NeedPriority::Low.weight());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("urgent".parse::<NeedPriority>().unwrap(), NeedPriority::Urgent);
        assert!("critical".parse::<NeedPriority>().is_err());
    }
}
