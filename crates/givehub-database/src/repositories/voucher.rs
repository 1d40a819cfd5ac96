//! Voucher repository implementation.
//!
//! Redemption is a single conditional UPDATE so that exactly one
//! concurrent redeemer can win.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use givehub_core::error::{AppError, ErrorKind};
use givehub_core::result::AppResult;
use givehub_entity::voucher::Voucher;

/// Repository for voucher rows.
#[derive(Debug, Clone)]
pub struct VoucherRepository {
    pool: PgPool,
}

impl VoucherRepository {
    /// Create a new voucher repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a voucher by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Voucher>> {
        sqlx::query_as::<_, Voucher>("SELECT * FROM vouchers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find voucher", e))
    }

    /// Find the voucher issued for a transfer, if any.
    pub async fn find_by_transfer(&self, transfer_id: Uuid) -> AppResult<Option<Voucher>> {
        sqlx::query_as::<_, Voucher>("SELECT * FROM vouchers WHERE transfer_id = $1")
            .bind(transfer_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find voucher", e))
    }

    /// Find a voucher by its redemption token.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<Voucher>> {
        sqlx::query_as::<_, Voucher>("SELECT * FROM vouchers WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find voucher", e))
    }

    /// Issue a voucher for a transfer.
    ///
    /// The unique constraint on `transfer_id` turns a concurrent double
    /// issue into `Conflict`.
    pub async fn create(
        &self,
        transfer_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<Voucher> {
        sqlx::query_as::<_, Voucher>(
            "INSERT INTO vouchers (transfer_id, token, expires_at) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(transfer_id)
        .bind(token)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                AppError::conflict("A voucher has already been issued for this transfer")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create voucher", e)
            }
        })
    }

    /// Mark a voucher used, only if it is still active and unexpired.
    ///
    /// Returns `None` when the condition did not hold (already used, or
    /// past expiry at the database clock). Under concurrent redemption
    /// exactly one caller receives the updated row.
    pub async fn redeem_if_active(&self, id: Uuid) -> AppResult<Option<Voucher>> {
        sqlx::query_as::<_, Voucher>(
            "UPDATE vouchers SET status = 'used', updated_at = NOW() \
             WHERE id = $1 AND status = 'active' AND expires_at > NOW() RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to redeem voucher", e))
    }
}
