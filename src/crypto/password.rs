//! Password hashing
//!
//! Accounts store only a one-way digest of the password. The digest must be
//! deterministic so a login can be checked by hashing the candidate again and
//! comparing. The algorithm sits behind [`PasswordHasher`] so a stronger one
//! can be swapped in without touching the ledger.

use sha2::{Digest, Sha256};

/// One-way, deterministic password transform
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, password: &str) -> String;

    /// Check a candidate password against a stored hash
    fn verify(&self, candidate: &str, stored_hash: &str) -> bool {
        self.hash(candidate) == stored_hash
    }
}

/// SHA-256 hex digest of the password
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
