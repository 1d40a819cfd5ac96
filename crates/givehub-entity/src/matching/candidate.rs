//! Match candidate value object.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::need::Need;

/// A scored device↔need pairing produced by the match scorer.
///
/// Ephemeral: recomputed on every query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The candidate device.
    pub device: Device,
    /// The need it was scored against.
    pub need: Need,
    /// Compatibility score, 0–100.
    pub score: u8,
    /// Great-circle distance between the parties, when both have
    /// registered coordinates.
    pub distance_km: Option<f64>,
}
