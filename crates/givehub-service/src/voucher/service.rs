//! Voucher service: issuance, verification, and redemption.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use givehub_core::config::voucher::VoucherConfig;
use givehub_core::error::AppError;
use givehub_core::result::AppResult;
use givehub_database::repositories::{TransferRepository, VoucherRepository};
use givehub_entity::transfer::Transfer;
use givehub_entity::voucher::{Voucher, VoucherStatus};

use crate::context::RequestContext;

use super::token::TokenGenerator;

/// Result of a non-mutating voucher verification.
#[derive(Debug, Clone)]
pub struct VoucherVerification {
    /// The voucher as stored.
    pub voucher: Voucher,
    /// Whether it could be redeemed right now. False for used vouchers
    /// and for vouchers past expiry, even when the stored status still
    /// reads `active`.
    pub is_valid: bool,
}

/// Owns the voucher lifecycle for transfers.
#[derive(Debug, Clone)]
pub struct VoucherService {
    voucher_repo: Arc<VoucherRepository>,
    transfer_repo: Arc<TransferRepository>,
    tokens: TokenGenerator,
    config: VoucherConfig,
}

impl VoucherService {
    /// Creates a new voucher service.
    pub fn new(
        voucher_repo: Arc<VoucherRepository>,
        transfer_repo: Arc<TransferRepository>,
        config: VoucherConfig,
    ) -> Self {
        Self {
            voucher_repo,
            transfer_repo,
            tokens: TokenGenerator::new(config.token_bytes),
            config,
        }
    }

    /// Issues a voucher for a transfer.
    ///
    /// Authorized for the transfer's donor or an administrator. At most
    /// one voucher exists per transfer; a second issue attempt fails with
    /// `Conflict`.
    pub async fn issue_voucher(
        &self,
        ctx: &RequestContext,
        transfer_id: Uuid,
    ) -> AppResult<Voucher> {
        let transfer = self.require_transfer(transfer_id).await?;

        if !ctx.is_admin() && ctx.user_id != transfer.donor_id {
            return Err(AppError::forbidden(
                "Only the transfer's donor may issue its voucher",
            ));
        }

        if self
            .voucher_repo
            .find_by_transfer(transfer_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "A voucher has already been issued for this transfer",
            ));
        }

        let token = self.tokens.generate();
        let expires_at = Utc::now() + Duration::hours(self.config.validity_hours);
        let voucher = self
            .voucher_repo
            .create(transfer_id, &token, expires_at)
            .await?;

        info!(
            voucher_id = %voucher.id,
            transfer_id = %transfer_id,
            user_id = %ctx.user_id,
            expires_at = %expires_at,
            "voucher issued"
        );
        Ok(voucher)
    }

    /// Looks up a voucher by token and reports whether it could be
    /// redeemed right now. Never mutates state; expiry is computed from
    /// the timestamp, not read from the stored status.
    pub async fn verify_voucher(&self, token: &str) -> AppResult<VoucherVerification> {
        let voucher = self
            .voucher_repo
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Voucher not found"))?;

        let is_valid = voucher.is_valid_at(Utc::now());
        Ok(VoucherVerification { voucher, is_valid })
    }

    /// Redeems a voucher, marking it `used` exactly once.
    ///
    /// Authorized for the school owning the referenced transfer or an
    /// administrator. The write is a conditional update on `active` and
    /// unexpired, so under concurrent redemption exactly one caller
    /// succeeds; the rest observe `Conflict` (or `Expired` when expiry
    /// was the reason the condition failed).
    pub async fn redeem_voucher(&self, ctx: &RequestContext, voucher_id: Uuid) -> AppResult<Voucher> {
        let voucher = self
            .voucher_repo
            .find_by_id(voucher_id)
            .await?
            .ok_or_else(|| AppError::not_found("Voucher not found"))?;
        let transfer = self.require_transfer(voucher.transfer_id).await?;

        if !ctx.is_admin() && ctx.user_id != transfer.school_id {
            return Err(AppError::forbidden(
                "Only the receiving school may redeem this voucher",
            ));
        }

        if voucher.status == VoucherStatus::Used {
            return Err(AppError::conflict("Voucher has already been used"));
        }
        if voucher.is_expired_at(Utc::now()) {
            return Err(AppError::expired("Voucher has expired"));
        }

        match self.voucher_repo.redeem_if_active(voucher_id).await? {
            Some(redeemed) => {
                info!(
                    voucher_id = %voucher_id,
                    transfer_id = %voucher.transfer_id,
                    user_id = %ctx.user_id,
                    "voucher redeemed"
                );
                Ok(redeemed)
            }
            // The conditional update lost: someone else redeemed it, or
            // it crossed its expiry between our read and the write.
            None => {
                let current = self
                    .voucher_repo
                    .find_by_id(voucher_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Voucher not found"))?;
                if current.status == VoucherStatus::Used {
                    Err(AppError::conflict("Voucher has already been used"))
                } else {
                    Err(AppError::expired("Voucher has expired"))
                }
            }
        }
    }

    async fn require_transfer(&self, transfer_id: Uuid) -> AppResult<Transfer> {
        self.transfer_repo
            .find_by_id(transfer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Transfer not found"))
    }
}
