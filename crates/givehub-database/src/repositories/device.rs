//! Device repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use givehub_core::error::{AppError, ErrorKind};
use givehub_core::result::AppResult;
use givehub_core::types::pagination::{PageRequest, PageResponse};
use givehub_entity::device::{CreateDevice, Device, DeviceStatus};

/// Repository for device rows.
///
/// The `matched`/`completed` statuses are written by the transfer
/// repository inside its transactions; this repository only writes the
/// moderation statuses.
#[derive(Debug, Clone)]
pub struct DeviceRepository {
    pool: PgPool,
}

impl DeviceRepository {
    /// Create a new device repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a device by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Device>> {
        sqlx::query_as::<_, Device>("SELECT * FROM devices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find device", e))
    }

    /// Insert a new device in `pending` status.
    pub async fn create(&self, data: &CreateDevice) -> AppResult<Device> {
        sqlx::query_as::<_, Device>(
            "INSERT INTO devices (donor_id, name, description, device_type, condition, quantity, images) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.donor_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.device_type)
        .bind(data.condition)
        .bind(data.quantity)
        .bind(&data.images)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create device", e))
    }

    /// List devices owned by a donor, newest first.
    pub async fn find_by_donor(
        &self,
        donor_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Device>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM devices WHERE donor_id = $1")
            .bind(donor_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count devices", e))?;

        let items = sqlx::query_as::<_, Device>(
            "SELECT * FROM devices WHERE donor_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(donor_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list devices", e))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Fetch every approved device (the matching pool).
    pub async fn find_approved(&self) -> AppResult<Vec<Device>> {
        sqlx::query_as::<_, Device>(
            "SELECT * FROM devices WHERE status = 'approved' ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load approved devices", e)
        })
    }

    /// Set the moderation status of a device (pending → approved/rejected).
    pub async fn set_status(&self, id: Uuid, status: DeviceStatus) -> AppResult<Option<Device>> {
        sqlx::query_as::<_, Device>(
            "UPDATE devices SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update device status", e)
        })
    }
}
