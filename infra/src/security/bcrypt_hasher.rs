//! Bcrypt implementation of the hashing seam.
//!
//! Bcrypt salts internally, so encoding the same input twice yields
//! different hashes, and `verify` compares without early exit. Both the
//! member passwords and the email verification codes go through this
//! hasher.

use bcrypt::{hash, verify, DEFAULT_COST};

use gs_core::services::traits::PasswordHasherTrait;

/// `PasswordHasherTrait` backed by bcrypt
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Custom work factor; tests use a low cost to stay fast
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherTrait for BcryptHasher {
    fn encode(&self, plaintext: &str) -> Result<String, String> {
        hash(plaintext, self.cost).map_err(|e| e.to_string())
    }

    fn matches(&self, plaintext: &str, hash: &str) -> bool {
        verify(plaintext, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's `MIN_COST` constant is not publicly exported; inline its value.
    const MIN_COST: u32 = 4;

    #[test]
    fn encode_then_match_roundtrip() {
        let hasher = BcryptHasher::with_cost(MIN_COST);

        let hashed = hasher.encode("123456").unwrap();
        assert_ne!(hashed, "123456");
        assert!(hasher.matches("123456", &hashed));
        assert!(!hasher.matches("654321", &hashed));
    }

    #[test]
    fn encoding_is_salted() {
        let hasher = BcryptHasher::with_cost(MIN_COST);

        let a = hasher.encode("123456").unwrap();
        let b = hasher.encode("123456").unwrap();
        assert_ne!(a, b);
        assert!(hasher.matches("123456", &a));
        assert!(hasher.matches("123456", &b));
    }

    #[test]
    fn matches_is_false_for_malformed_hash() {
        let hasher = BcryptHasher::with_cost(MIN_COST);
        assert!(!hasher.matches("123456", "not-a-bcrypt-hash"));
    }
}
