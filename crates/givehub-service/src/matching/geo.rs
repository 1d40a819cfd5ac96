//! Great-circle distance and the geographic score term.

use givehub_core::config::matching::MatchingConfig;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two `(latitude, longitude)` pairs in
/// kilometers, via the haversine formula.
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lon2) = (b.0.to_radians(), b.1.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Banded score contribution for a distance.
///
/// Monotonically non-increasing in distance; `None` (unknown distance)
/// contributes exactly zero — missing coordinates are never penalized.
pub fn distance_bonus(distance_km: Option<f64>, config: &MatchingConfig) -> i32 {
    let Some(d) = distance_km else {
        return 0;
    };

    if d <= config.near_distance_km {
        config.near_bonus
    } else if d <= config.mid_distance_km {
        config.mid_bonus
    } else if d <= config.far_distance_km {
        0
    } else {
        config.far_penalty
    }
}
