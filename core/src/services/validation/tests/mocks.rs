//! Mock implementations for validator tests

use crate::services::auth::PasswordHasher;

/// Password hasher that prefixes instead of hashing
pub struct PlainPasswordHasher;

impl PasswordHasher for PlainPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, String> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, password_hash: &str) -> bool {
        password_hash == format!("hashed:{}", password)
    }
}

/// Hash a password the way `PlainPasswordHasher` does
pub fn plain_hash(password: &str) -> String {
    format!("hashed:{}", password)
}
