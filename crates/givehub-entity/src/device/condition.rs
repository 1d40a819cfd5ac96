//! Device condition enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical condition of a donated device.
///
/// Conditions are totally ordered: `UsedFair < UsedGood < New`. The order
/// is what the minimum-condition filter of the match scorer relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "device_condition", rename_all = "snake_case")]
#[serde(rename_all = "kebab-case")]
pub enum DeviceCondition {
    /// Brand new, unused.
    New,
    /// Used but in good working order.
    UsedGood,
    /// Used with visible wear; functional.
    UsedFair,
}

impl DeviceCondition {
    /// Numeric rank for ordering comparisons (higher = better condition).
    pub fn rank(&self) -> u8 {
        match self {
            Self::New => 3,
            Self::UsedGood => 2,
            Self::UsedFair => 1,
        }
    }

    /// Whether this condition satisfies a minimum acceptable condition.
    ///
    /// `None` means the need accepts any condition.
    pub fn meets_minimum(&self, minimum: Option<DeviceCondition>) -> bool {
        match minimum {
            Some(min) => self.rank() >= min.rank(),
            None => true,
        }
    }

    /// Return the condition as its kebab-case public label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::UsedGood => "used-good",
            Self::UsedFair => "used-fair",
        }
    }
}

impl fmt::Display for DeviceCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceCondition {
    type Err = givehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "used-good" | "used_good" => Ok(Self::UsedGood),
            "used-fair" | "used_fair" => Ok(Self::UsedFair),
            _ => Err(givehub_core::AppError::validation(format!(
                "Invalid device condition: '{s}'. Expected one of: new, used-good, used-fair"
            ))),
        }
    }
}
