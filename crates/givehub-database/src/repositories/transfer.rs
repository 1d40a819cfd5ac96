//! Transfer repository implementation.
//!
//! Transfer mutations synchronize the owning device's status in the same
//! transaction: either both rows update or neither does.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use givehub_core::error::{AppError, ErrorKind};
use givehub_core::result::AppResult;
use givehub_core::types::pagination::{PageRequest, PageResponse};
use givehub_entity::device::DeviceStatus;
use givehub_entity::transfer::{CreateTransfer, Transfer, TransferStatus};

/// Filter criteria for listing transfers.
#[derive(Debug, Clone, Default)]
pub struct TransferFilter {
    /// Restrict to a device.
    pub device_id: Option<Uuid>,
    /// Restrict to a donor.
    pub donor_id: Option<Uuid>,
    /// Restrict to a school.
    pub school_id: Option<Uuid>,
    /// Restrict to a status.
    pub status: Option<TransferStatus>,
}

/// Repository for transfer rows.
#[derive(Debug, Clone)]
pub struct TransferRepository {
    pool: PgPool,
}

impl TransferRepository {
    /// Create a new transfer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a transfer by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Transfer>> {
        sqlx::query_as::<_, Transfer>("SELECT * FROM transfers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find transfer", e))
    }

    /// Find the non-terminal transfer referencing a device, if one exists.
    ///
    /// Non-terminal for the duplicate guard means `pending`, `approved`,
    /// or `in_transit`.
    pub async fn find_active_by_device(&self, device_id: Uuid) -> AppResult<Option<Transfer>> {
        sqlx::query_as::<_, Transfer>(
            "SELECT * FROM transfers WHERE device_id = $1 \
             AND status IN ('pending', 'approved', 'in_transit')",
        )
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find active transfer", e)
        })
    }

    /// Insert a transfer in `pending` status and reserve its device by
    /// setting the device to `matched`, atomically.
    ///
    /// A concurrent insert racing past the service-level duplicate check
    /// trips the partial unique index and surfaces as `Conflict`.
    pub async fn create_with_device_reservation(
        &self,
        data: &CreateTransfer,
    ) -> AppResult<Transfer> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let transfer = sqlx::query_as::<_, Transfer>(
            "INSERT INTO transfers (device_id, donor_id, school_id, message) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.device_id)
        .bind(data.donor_id)
        .bind(data.school_id)
        .bind(&data.message)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                AppError::conflict("An active transfer already exists for this device")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create transfer", e)
            }
        })?;

        sqlx::query("UPDATE devices SET status = 'matched', updated_at = NOW() WHERE id = $1")
            .bind(data.device_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to reserve device", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transfer creation", e)
        })?;

        Ok(transfer)
    }

    /// Compare-and-set status update with device resynchronization.
    ///
    /// The transfer row is updated only if its current status still equals
    /// `expected`; the device row is resynchronized to `device_status` in
    /// the same transaction. Returns `None` without mutating anything when
    /// the expectation no longer holds.
    pub async fn update_status_checked(
        &self,
        id: Uuid,
        expected: TransferStatus,
        new_status: TransferStatus,
        notes: Option<&str>,
        receipt_images: Option<&[String]>,
        device_status: DeviceStatus,
    ) -> AppResult<Option<Transfer>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let updated = sqlx::query_as::<_, Transfer>(
            "UPDATE transfers SET \
                 status = $3, \
                 notes = COALESCE($4, notes), \
                 receipt_images = receipt_images || COALESCE($5, '{}'::text[]), \
                 updated_at = NOW() \
             WHERE id = $1 AND status = $2 RETURNING *",
        )
        .bind(id)
        .bind(expected)
        .bind(new_status)
        .bind(notes)
        .bind(receipt_images)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update transfer status", e)
        })?;

        let Some(transfer) = updated else {
            tx.rollback().await.ok();
            return Ok(None);
        };

        sqlx::query("UPDATE devices SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(transfer.device_id)
            .bind(device_status)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to resync device status", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit status update", e)
        })?;

        Ok(Some(transfer))
    }

    /// List transfers matching a filter, newest first.
    pub async fn list(
        &self,
        filter: &TransferFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Transfer>> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM transfers WHERE 1=1");
        push_filter(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count transfers", e)
            })?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT * FROM transfers WHERE 1=1");
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(page.limit() as i64);
        builder.push(" OFFSET ");
        builder.push_bind(page.offset() as i64);

        let items = builder
            .build_query_as::<Transfer>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list transfers", e)
            })?;

        Ok(PageResponse::new(items, page, total as u64))
    }
}

/// Append the filter's WHERE clauses to a query builder.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &TransferFilter) {
    if let Some(device_id) = filter.device_id {
        builder.push(" AND device_id = ");
        builder.push_bind(device_id);
    }
    if let Some(donor_id) = filter.donor_id {
        builder.push(" AND donor_id = ");
        builder.push_bind(donor_id);
    }
    if let Some(school_id) = filter.school_id {
        builder.push(" AND school_id = ");
        builder.push_bind(school_id);
    }
    if let Some(status) = filter.status {
        builder.push(" AND status = ");
        builder.push_bind(status);
    }
}
