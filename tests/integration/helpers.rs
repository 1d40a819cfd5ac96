//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use givehub_api::state::AppState;
use givehub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

/// An identity the gateway would forward, usable as request headers.
#[derive(Debug, Clone, Copy)]
pub struct TestIdentity {
    pub user_id: Uuid,
    pub role: &'static str,
}

impl TestApp {
    /// Create a new test application backed by the test database.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = givehub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        givehub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let router = givehub_api::router::build_router(AppState::new(config.clone(), db_pool.clone()));

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["vouchers", "transfers", "needs", "devices", "profiles"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test profile and return its identity
    pub async fn create_profile(
        &self,
        role: &'static str,
        verified: bool,
        coords: Option<(f64, f64)>,
    ) -> TestIdentity {
        let id = Uuid::new_v4();
        let (lat, lon) = match coords {
            Some((lat, lon)) => (Some(lat), Some(lon)),
            None => (None, None),
        };

        sqlx::query(
            r#"INSERT INTO profiles (id, role, display_name, is_verified, latitude, longitude)
               VALUES ($1, $2::user_role, $3, $4, $5, $6)"#,
        )
        .bind(id)
        .bind(role)
        .bind(format!("test-{}", &id.to_string()[..8]))
        .bind(verified)
        .bind(lat)
        .bind(lon)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test profile");

        TestIdentity { user_id: id, role }
    }

    /// Insert a device directly in the given status, bypassing moderation.
    pub async fn create_device(
        &self,
        donor: &TestIdentity,
        device_type: &str,
        condition: &str,
        status: &str,
    ) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"INSERT INTO devices (id, donor_id, name, description, device_type, condition, quantity, images, status)
               VALUES ($1, $2, $3, 'integration fixture', $4, $5::device_condition, 1, '{}', $6::device_status)"#,
        )
        .bind(id)
        .bind(donor.user_id)
        .bind(format!("Test {}", device_type))
        .bind(device_type)
        .bind(condition)
        .bind(status)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test device");
        id
    }

    /// Insert an open need.
    pub async fn create_need(
        &self,
        school: &TestIdentity,
        device_type: &str,
        priority: &str,
        min_condition: Option<&str>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"INSERT INTO needs (id, school_id, device_type, quantity, description, specifications, min_condition, priority)
               VALUES ($1, $2, $3, 1, '', '{}'::jsonb, $4::device_condition, $5::need_priority)"#,
        )
        .bind(id)
        .bind(school.user_id)
        .bind(device_type)
        .bind(min_condition)
        .bind(priority)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test need");
        id
    }

    /// Make an HTTP request to the test app with forwarded identity headers.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        identity: Option<&TestIdentity>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(identity) = identity {
            req = req
                .header("X-User-Id", identity.user_id.to_string())
                .header("X-User-Role", identity.role);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of a success envelope.
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&Value::Null)
    }
}
