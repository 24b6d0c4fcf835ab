//! Registration input value objects.

use serde::{Deserialize, Serialize};

/// Raw registration input as submitted by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Requested unique username
    pub username: String,

    /// Requested unique email address
    pub email: String,

    /// Requested unique phone number
    pub phone: String,

    /// Plaintext password
    pub password: String,

    /// Password confirmation, must equal `password`
    pub password_confirm: String,
}

/// Registration input that has passed all validation rules
///
/// Only the validator constructs this; holding one means required fields
/// are present, the password was confirmed, and no identifier collided at
/// validation time. The storage unique indexes remain the final authority
/// at commit time.
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}
