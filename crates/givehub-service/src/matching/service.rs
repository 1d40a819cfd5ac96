//! Matching service: loads candidate pools and produces ranked matches.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use givehub_core::config::matching::MatchingConfig;
use givehub_core::error::AppError;
use givehub_core::result::AppResult;
use givehub_database::repositories::{DeviceRepository, NeedRepository, ProfileRepository};
use givehub_entity::device::Device;
use givehub_entity::matching::MatchCandidate;

use crate::context::RequestContext;

use super::extractor::{AttributeExtractor, ExtractedAttributes};
use super::scorer::{self, MatchScorer};
use super::geo;

/// Produces ranked device↔need match candidates.
///
/// Scoring itself is pure; this service resolves the candidate pools
/// (approved devices, open needs), participant coordinates, and the
/// device type when the donor left it unclassified.
#[derive(Clone)]
pub struct MatchingService {
    device_repo: Arc<DeviceRepository>,
    need_repo: Arc<NeedRepository>,
    profile_repo: Arc<ProfileRepository>,
    extractor: Arc<AttributeExtractor>,
    scorer: MatchScorer,
}

impl MatchingService {
    /// Creates a new matching service.
    pub fn new(
        device_repo: Arc<DeviceRepository>,
        need_repo: Arc<NeedRepository>,
        profile_repo: Arc<ProfileRepository>,
        config: MatchingConfig,
    ) -> Self {
        Self {
            device_repo,
            need_repo,
            profile_repo,
            extractor: Arc::new(AttributeExtractor::new()),
            scorer: MatchScorer::new(config),
        }
    }

    /// Extracts normalized attributes from a free-text description.
    pub fn extract_attributes(&self, description: &str) -> ExtractedAttributes {
        self.extractor.extract(description)
    }

    /// Ranks every approved device against the given need.
    ///
    /// Visible to the need's school and to administrators. Devices whose
    /// condition falls below the need's minimum are excluded entirely.
    pub async fn rank_devices_for_need(
        &self,
        ctx: &RequestContext,
        need_id: Uuid,
    ) -> AppResult<Vec<MatchCandidate>> {
        let need = self
            .need_repo
            .find_by_id(need_id)
            .await?
            .ok_or_else(|| AppError::not_found("Need not found"))?;

        if !ctx.is_admin() && ctx.user_id != need.school_id {
            return Err(AppError::forbidden(
                "Only the posting school may view matches for this need",
            ));
        }

        let school_coords = self.coordinates_of(need.school_id).await?;
        let devices = self.device_repo.find_approved().await?;

        let mut candidates = Vec::with_capacity(devices.len());
        for device in devices {
            if !device.condition.meets_minimum(need.min_condition) {
                continue;
            }

            let donor_coords = self.coordinates_of(device.donor_id).await?;
            let distance_km = match (school_coords, donor_coords) {
                (Some(a), Some(b)) => Some(geo::haversine_km(a, b)),
                _ => None,
            };

            let device_type = self.resolve_device_type(&device);
            let score = self
                .scorer
                .score_for_need(device_type.as_deref(), &need, distance_km);

            candidates.push(MatchCandidate {
                device,
                need: need.clone(),
                score,
                distance_km,
            });
        }

        debug!(need_id = %need_id, candidates = candidates.len(), "ranked devices for need");
        Ok(scorer::rank(candidates))
    }

    /// Ranks every open need against the given device.
    ///
    /// Visible to the device's donor and to administrators. Needs whose
    /// minimum condition the device does not meet are excluded.
    pub async fn rank_needs_for_device(
        &self,
        ctx: &RequestContext,
        device_id: Uuid,
    ) -> AppResult<Vec<MatchCandidate>> {
        let device = self
            .device_repo
            .find_by_id(device_id)
            .await?
            .ok_or_else(|| AppError::not_found("Device not found"))?;

        if !ctx.is_admin() && ctx.user_id != device.donor_id {
            return Err(AppError::forbidden(
                "Only the donor may view matches for this device",
            ));
        }

        let donor_coords = self.coordinates_of(device.donor_id).await?;
        let device_type = self.resolve_device_type(&device);
        let needs = self.need_repo.find_open().await?;

        let mut candidates = Vec::with_capacity(needs.len());
        for need in needs {
            if !device.condition.meets_minimum(need.min_condition) {
                continue;
            }

            let school_coords = self.coordinates_of(need.school_id).await?;
            let distance_km = match (donor_coords, school_coords) {
                (Some(a), Some(b)) => Some(geo::haversine_km(a, b)),
                _ => None,
            };

            let score = self
                .scorer
                .score_for_device(device_type.as_deref(), &need, distance_km);

            candidates.push(MatchCandidate {
                device: device.clone(),
                need,
                score,
                distance_km,
            });
        }

        debug!(device_id = %device_id, candidates = candidates.len(), "ranked needs for device");
        Ok(scorer::rank(candidates))
    }

    /// The device's stored type, or the type extracted from its free text
    /// when the donor did not classify it.
    fn resolve_device_type(&self, device: &Device) -> Option<String> {
        if device.device_type.is_some() {
            return device.device_type.clone();
        }
        let text = format!("{} {}", device.name, device.description);
        self.extractor.extract(&text).device_type
    }

    async fn coordinates_of(&self, user_id: Uuid) -> AppResult<Option<(f64, f64)>> {
        Ok(self
            .profile_repo
            .find_by_id(user_id)
            .await?
            .and_then(|profile| profile.coordinates()))
    }
}

impl std::fmt::Debug for MatchingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchingService").finish_non_exhaustive()
    }
}
