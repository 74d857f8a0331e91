//! One-time password reset codes.
//!
//! The plaintext code goes to the caller; only its SHA-256 hex digest is
//! stored, so a leaked table does not reveal live codes.

use rand::Rng;
use sha2::{Digest, Sha256};

pub const RESET_CODE_LENGTH: usize = 8;

/// Generate a random alphanumeric code. Returns `(plaintext, sha256_hex)`.
pub fn generate_reset_code() -> (String, String) {
    let code: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(RESET_CODE_LENGTH)
        .map(char::from)
        .collect();
    let hash = hash_reset_code(&code);
    (code, hash)
}

pub fn hash_reset_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.trim().as_bytes());
    format!("{:x}", hasher.finalize())
}
