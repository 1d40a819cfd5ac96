//! Voucher issuance configuration.

use serde::{Deserialize, Serialize};

/// Voucher issuance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherConfig {
    /// How long an issued voucher remains redeemable, in hours.
    #[serde(default = "default_validity_hours")]
    pub validity_hours: i64,
    /// Number of random bytes in a redemption token (hex-encoded, so the
    /// token string is twice this length).
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,
}

impl Default for VoucherConfig {
    fn default() -> Self {
        Self {
            validity_hours: default_validity_hours(),
            token_bytes: default_token_bytes(),
        }
    }
}

fn default_validity_hours() -> i64 {
    72
}

fn default_token_bytes() -> usize {
    32
}
