//! bcrypt implementation of the password hasher.

use ante_core::services::auth::PasswordHasher;

/// Password hasher backed by bcrypt
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the default bcrypt cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost factor
    ///
    /// Lower costs are only appropriate in tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, String> {
        bcrypt::hash(password, self.cost).map_err(|e| e.to_string())
    }

    fn verify(&self, password: &str, password_hash: &str) -> bool {
        // A malformed stored hash reads as a failed verification.
        bcrypt::verify(password, password_hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps these tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hasher = BcryptPasswordHasher::with_cost(TEST_COST);
        let hash = hasher.hash("secret").unwrap();

        assert_ne!(hash, "secret");
        assert!(hasher.verify("secret", &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hasher = BcryptPasswordHasher::with_cost(TEST_COST);
        assert!(!hasher.verify("secret", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = BcryptPasswordHasher::with_cost(TEST_COST);
        let first = hasher.hash("secret").unwrap();
        let second = hasher.hash("secret").unwrap();
        assert_ne!(first, second);
    }
}
