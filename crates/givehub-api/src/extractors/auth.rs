//! `AuthUser` extractor — reads the verified identity forwarded by the
//! authentication gateway and injects a `RequestContext`.
//!
//! Token verification happens upstream; by the time a request reaches
//! this service the gateway has already authenticated the caller and
//! attached `X-User-Id` / `X-User-Role` headers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use givehub_core::error::AppError;
use givehub_entity::user::UserRole;
use givehub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = header_value(parts, "x-user-id")?
            .parse::<Uuid>()
            .map_err(|_| AppError::validation("X-User-Id header is not a valid UUID"))?;

        let role = header_value(parts, "x-user-role")?.parse::<UserRole>()?;

        Ok(AuthUser(RequestContext::new(user_id, role)))
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, AppError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::forbidden(format!("Missing identity header: {name}")))
}
