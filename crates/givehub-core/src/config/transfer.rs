//! Transfer lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Transfer lifecycle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    /// When true, a status update must also be a legal step in the
    /// transition table (pending → approved/rejected → in_transit →
    /// delivered → received). When false, only the role policy is checked,
    /// matching the lenient behavior of earlier deployments that relied on
    /// skipping steps.
    #[serde(default = "default_strict")]
    pub strict_transitions: bool,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            strict_transitions: default_strict(),
        }
    }
}

fn default_strict() -> bool {
    true
}
