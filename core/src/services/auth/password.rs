//! Password hashing capability

/// Trait for password hashing and verification
///
/// The concrete algorithm lives in the infrastructure layer; the domain
/// only ever sees opaque hash strings.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, password: &str) -> Result<String, String>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, password: &str, password_hash: &str) -> bool;
}
