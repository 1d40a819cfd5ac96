//! Transfer service: creation gates, role-gated status updates with a
//! compare-and-set guard, and participant-scoped reads.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use givehub_core::config::transfer::TransferConfig;
use givehub_core::error::AppError;
use givehub_core::result::AppResult;
use givehub_core::types::pagination::{PageRequest, PageResponse};
use givehub_database::repositories::{
    DeviceRepository, ProfileRepository, TransferFilter, TransferRepository,
};
use givehub_entity::device::DeviceStatus;
use givehub_entity::transfer::{CreateTransfer, Transfer, TransferStatus};
use givehub_entity::user::UserRole;

use crate::context::RequestContext;

use super::lifecycle;

/// A requested status update for a transfer.
#[derive(Debug, Clone)]
pub struct UpdateStatus {
    /// The target status.
    pub status: TransferStatus,
    /// Notes to record alongside the update.
    pub notes: Option<String>,
    /// Receipt-confirmation image URLs to append.
    pub receipt_images: Option<Vec<String>>,
}

/// Owns the transfer lifecycle.
///
/// Device availability is written exclusively through this service's
/// repository calls; transfer creation reserves the device, and every
/// status update resynchronizes it in the same transaction.
#[derive(Debug, Clone)]
pub struct TransferService {
    transfer_repo: Arc<TransferRepository>,
    device_repo: Arc<DeviceRepository>,
    profile_repo: Arc<ProfileRepository>,
    config: TransferConfig,
}

impl TransferService {
    /// Creates a new transfer service.
    pub fn new(
        transfer_repo: Arc<TransferRepository>,
        device_repo: Arc<DeviceRepository>,
        profile_repo: Arc<ProfileRepository>,
        config: TransferConfig,
    ) -> Self {
        Self {
            transfer_repo,
            device_repo,
            profile_repo,
            config,
        }
    }

    /// Proposes a transfer of a device to a school.
    ///
    /// The device must belong to the acting donor (administrators may act
    /// for any donor) and be in `approved` status; the school must be a
    /// verified school; the device must not already have a transfer in
    /// flight. On success the transfer starts in `pending` and the device
    /// is reserved as `matched`.
    pub async fn create_transfer(
        &self,
        ctx: &RequestContext,
        device_id: Uuid,
        school_id: Uuid,
        message: Option<String>,
    ) -> AppResult<Transfer> {
        let device = self
            .device_repo
            .find_by_id(device_id)
            .await?
            .ok_or_else(|| AppError::not_found("Device not found"))?;

        if !ctx.is_admin() && ctx.user_id != device.donor_id {
            return Err(AppError::forbidden(
                "Only the owning donor may create a transfer for this device",
            ));
        }
        if device.status != DeviceStatus::Approved {
            return Err(AppError::validation(
                "Device is not eligible for transfer: it must be in approved status",
            ));
        }

        let school = self
            .profile_repo
            .find_by_id(school_id)
            .await?
            .ok_or_else(|| AppError::not_found("School not found"))?;
        if school.role != UserRole::School || !school.is_verified {
            return Err(AppError::validation(
                "School is not eligible: recipient must be a verified school",
            ));
        }

        if self
            .transfer_repo
            .find_active_by_device(device_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "An active transfer already exists for this device",
            ));
        }

        let transfer = self
            .transfer_repo
            .create_with_device_reservation(&CreateTransfer {
                device_id,
                donor_id: device.donor_id,
                school_id,
                message,
            })
            .await?;

        info!(
            transfer_id = %transfer.id,
            device_id = %device_id,
            school_id = %school_id,
            user_id = %ctx.user_id,
            "transfer created"
        );
        Ok(transfer)
    }

    /// Applies a role-gated status update to a transfer.
    ///
    /// The role policy always applies; the transition-table check can be
    /// relaxed via configuration for deployments that allow skipping
    /// steps. The write itself is compare-and-set on the status observed
    /// here, so a concurrent update surfaces as `Conflict` instead of
    /// silently winning.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        transfer_id: Uuid,
        update: UpdateStatus,
    ) -> AppResult<Transfer> {
        let transfer = self
            .transfer_repo
            .find_by_id(transfer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Transfer not found"))?;

        let actor = lifecycle::Actor::classify(
            ctx.role,
            ctx.user_id,
            transfer.donor_id,
            transfer.school_id,
        );
        if !actor.may_set(update.status) {
            return Err(AppError::forbidden(
                "Your role does not permit setting this transfer status",
            ));
        }

        if self.config.strict_transitions
            && !lifecycle::is_valid_transition(transfer.status, update.status)
        {
            return Err(AppError::validation(format!(
                "Cannot move transfer from {} to {}",
                transfer.status, update.status
            )));
        }

        let device_status = lifecycle::device_status_for(update.status);
        let updated = self
            .transfer_repo
            .update_status_checked(
                transfer_id,
                transfer.status,
                update.status,
                update.notes.as_deref(),
                update.receipt_images.as_deref(),
                device_status,
            )
            .await?;

        let Some(updated) = updated else {
            warn!(
                transfer_id = %transfer_id,
                expected = %transfer.status,
                "transfer status changed concurrently"
            );
            return Err(AppError::conflict(
                "Transfer was updated concurrently; refresh and retry",
            ));
        };

        info!(
            transfer_id = %transfer_id,
            from = %transfer.status,
            to = %updated.status,
            user_id = %ctx.user_id,
            "transfer status updated"
        );
        Ok(updated)
    }

    /// Fetches a transfer. Participants and administrators only.
    pub async fn get_transfer(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Transfer> {
        let transfer = self
            .transfer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Transfer not found"))?;
        self.authorize_read(ctx, &transfer)?;
        Ok(transfer)
    }

    /// Lists transfers. Non-administrators are restricted to transfers
    /// they participate in, regardless of the requested filter.
    pub async fn list_transfers(
        &self,
        ctx: &RequestContext,
        mut filter: TransferFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Transfer>> {
        if !ctx.is_admin() {
            match ctx.role {
                UserRole::Donor => filter.donor_id = Some(ctx.user_id),
                UserRole::School => filter.school_id = Some(ctx.user_id),
                UserRole::Admin => {}
            }
        }
        self.transfer_repo.list(&filter, page).await
    }

    fn authorize_read(&self, ctx: &RequestContext, transfer: &Transfer) -> AppResult<()> {
        if ctx.is_admin() || ctx.user_id == transfer.donor_id || ctx.user_id == transfer.school_id
        {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Only transfer participants may view this transfer",
            ))
        }
    }
}
