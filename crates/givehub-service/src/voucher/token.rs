//! Opaque redemption-token generation.

use rand::RngCore;

/// Generates unguessable redemption tokens.
///
/// Tokens are hex-encoded random bytes from the thread-local CSPRNG;
/// they carry no structure and are only ever compared for equality.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    token_bytes: usize,
}

impl TokenGenerator {
    /// Creates a generator producing tokens of `token_bytes` random bytes
    /// (twice that many hex characters).
    pub fn new(token_bytes: usize) -> Self {
        Self { token_bytes }
    }

    /// Generates a fresh token.
    pub fn generate(&self) -> String {
        let mut bytes = vec![0u8; self.token_bytes];
        rand::thread_rng().fill_bytes(&mut bytes);
        let mut token = String::with_capacity(bytes.len() * 2);
        for byte in &bytes {
            token.push_str(&format!("{byte:02x}"));
        }
        token
    }
}
