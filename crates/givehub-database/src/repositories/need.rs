//! Need repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use givehub_core::error::{AppError, ErrorKind};
use givehub_core::result::AppResult;
use givehub_core::types::pagination::{PageRequest, PageResponse};
use givehub_entity::need::{CreateNeed, Need};

/// Repository for need rows.
#[derive(Debug, Clone)]
pub struct NeedRepository {
    pool: PgPool,
}

impl NeedRepository {
    /// Create a new need repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a need by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Need>> {
        sqlx::query_as::<_, Need>("SELECT * FROM needs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find need", e))
    }

    /// Insert a new need in `open` status.
    pub async fn create(&self, data: &CreateNeed) -> AppResult<Need> {
        sqlx::query_as::<_, Need>(
            "INSERT INTO needs (school_id, device_type, quantity, description, specifications, min_condition, priority) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.school_id)
        .bind(&data.device_type)
        .bind(data.quantity)
        .bind(&data.description)
        .bind(Json(&data.specifications))
        .bind(data.min_condition)
        .bind(data.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create need", e))
    }

    /// List needs posted by a school, newest first.
    pub async fn find_by_school(
        &self,
        school_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Need>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM needs WHERE school_id = $1")
            .bind(school_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count needs", e))?;

        let items = sqlx::query_as::<_, Need>(
            "SELECT * FROM needs WHERE school_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(school_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list needs", e))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Fetch every open need (the matching pool for the device side).
    pub async fn find_open(&self) -> AppResult<Vec<Need>> {
        sqlx::query_as::<_, Need>(
            "SELECT * FROM needs WHERE status = 'open' ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load open needs", e))
    }
}
