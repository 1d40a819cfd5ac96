//! Device↔need compatibility scoring and candidate ranking.

use givehub_core::config::matching::MatchingConfig;
use givehub_entity::matching::MatchCandidate;
use givehub_entity::need::Need;

use super::geo;

/// Score contribution for an exact device-type match.
const EXACT_TYPE_SCORE: i32 = 60;
/// Score contribution when both types fall in the same synonym group.
const GROUP_TYPE_SCORE: i32 = 40;

/// Broad device-type synonym groups used for partial type credit.
/// Order is irrelevant here; membership is what matters.
const SYNONYM_GROUPS: &[&[&str]] = &[
    // laptop-class
    &["laptop", "notebook", "macbook", "chromebook", "ultrabook"],
    // desktop-class
    &["desktop", "pc", "workstation", "tower", "all-in-one", "imac"],
    // tablet-class
    &["tablet", "ipad"],
    // phone-class
    &["smartphone", "phone", "iphone", "mobile"],
];

/// Computes 0–100 compatibility scores between devices and needs.
///
/// Deterministic and infallible: missing optional fields contribute zero
/// rather than erroring.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    config: MatchingConfig,
}

impl MatchScorer {
    /// Creates a scorer with the given geographic band configuration.
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Score a device against a need from the need's side: type
    /// compatibility + the need's priority weight + the distance term.
    pub fn score_for_need(
        &self,
        device_type: Option<&str>,
        need: &Need,
        distance_km: Option<f64>,
    ) -> u8 {
        let mut score = self.type_score(device_type, &need.device_type);
        score += need.priority.weight();
        score += geo::distance_bonus(distance_km, &self.config);
        score.clamp(0, 100) as u8
    }

    /// Score a device against a need from the device's side: type
    /// compatibility + the distance term. Priority applies only when
    /// scoring on behalf of a need.
    pub fn score_for_device(
        &self,
        device_type: Option<&str>,
        need: &Need,
        distance_km: Option<f64>,
    ) -> u8 {
        let mut score = self.type_score(device_type, &need.device_type);
        score += geo::distance_bonus(distance_km, &self.config);
        score.clamp(0, 100) as u8
    }

    /// Type compatibility term: exact label match, then synonym-group
    /// match, then zero. An unclassified device contributes zero.
    fn type_score(&self, device_type: Option<&str>, need_type: &str) -> i32 {
        let Some(device_type) = device_type else {
            return 0;
        };

        if device_type.eq_ignore_ascii_case(need_type) {
            return EXACT_TYPE_SCORE;
        }

        match (synonym_group(device_type), synonym_group(need_type)) {
            (Some(a), Some(b)) if a == b => GROUP_TYPE_SCORE,
            _ => 0,
        }
    }
}

/// Sorts candidates by score descending; ties go to the pairing with the
/// most recent creation time (device or need, whichever is newer).
pub fn rank(mut candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    candidates.sort_by(|a, b| {
        b.score.cmp(&a.score).then_with(|| {
            let a_newest = a.device.created_at.max(a.need.created_at);
            let b_newest = b.device.created_at.max(b.need.created_at);
            b_newest.cmp(&a_newest)
        })
    });
    candidates
}

/// Index of the synonym group containing the label, if any.
fn synonym_group(label: &str) -> Option<usize> {
    let lowered = label.to_lowercase();
    SYNONYM_GROUPS
        .iter()
        .position(|group| group.contains(&lowered.as_str()))
}
