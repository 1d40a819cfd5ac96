//! Profile repository implementation.
//!
//! Profile management is handled by an external system; this repository
//! only reads the rows the core needs (verification gate, coordinates)
//! and inserts rows for test fixtures and seeding.

use sqlx::PgPool;
use uuid::Uuid;

use givehub_core::error::{AppError, ErrorKind};
use givehub_core::result::AppResult;
use givehub_entity::user::{UserProfile, UserRole};

/// Repository for user profile rows.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a profile by user ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        sqlx::query_as::<_, UserProfile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    /// Insert a profile row.
    pub async fn create(
        &self,
        role: UserRole,
        display_name: &str,
        is_verified: bool,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> AppResult<UserProfile> {
        sqlx::query_as::<_, UserProfile>(
            "INSERT INTO profiles (role, display_name, is_verified, latitude, longitude) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(role)
        .bind(display_name)
        .bind(is_verified)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create profile", e))
    }
}
