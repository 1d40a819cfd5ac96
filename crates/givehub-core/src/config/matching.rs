//! Match scoring configuration.

use serde::{Deserialize, Serialize};

/// Distance band thresholds and bonuses for the geographic score term.
///
/// The resulting bonus must be monotonically non-increasing in distance:
/// the scorer assumes `near_bonus >= mid_bonus >= 0 >= far_penalty`. The
/// defaults are bonus-only (`far_penalty` of zero) so that an exact type
/// match keeps its full type score at any distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Distance (km) up to which the `near_bonus` applies.
    #[serde(default = "default_near_km")]
    pub near_distance_km: f64,
    /// Distance (km) up to which the `mid_bonus` applies.
    #[serde(default = "default_mid_km")]
    pub mid_distance_km: f64,
    /// Distance (km) up to which no bonus or penalty applies.
    #[serde(default = "default_far_km")]
    pub far_distance_km: f64,
    /// Bonus for candidates within `near_distance_km`.
    #[serde(default = "default_near_bonus")]
    pub near_bonus: i32,
    /// Bonus for candidates within `mid_distance_km`.
    #[serde(default = "default_mid_bonus")]
    pub mid_bonus: i32,
    /// Adjustment (zero or negative) for candidates beyond
    /// `far_distance_km`.
    #[serde(default = "default_far_penalty")]
    pub far_penalty: i32,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            near_distance_km: default_near_km(),
            mid_distance_km: default_mid_km(),
            far_distance_km: default_far_km(),
            near_bonus: default_near_bonus(),
            mid_bonus: default_mid_bonus(),
            far_penalty: default_far_penalty(),
        }
    }
}

fn default_near_km() -> f64 {
    25.0
}

fn default_mid_km() -> f64 {
    100.0
}

fn default_far_km() -> f64 {
    500.0
}

fn default_near_bonus() -> i32 {
    10
}

fn default_mid_bonus() -> i32 {
    5
}

fn default_far_penalty() -> i32 {
    0
}
