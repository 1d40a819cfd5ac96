//! Response DTOs.

use serde::{Deserialize, Serialize};

use givehub_entity::voucher::Voucher;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Detailed health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database connectivity.
    pub database: String,
}

/// Voucher verification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherVerificationResponse {
    /// The voucher as stored.
    pub voucher: Voucher,
    /// Whether the voucher could be redeemed right now.
    pub is_valid: bool,
}
