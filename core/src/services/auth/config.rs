//! Configuration for the authentication service

use crate::domain::value_objects::identifier::IdentifierField;

/// Static description of which fields identify and register an account
///
/// Resolved at compile time rather than discovered from the account model
/// at runtime: the login field and the required registration fields are
/// named here explicitly.
#[derive(Debug, Clone)]
pub struct IdentifierConfig {
    /// The field the username-style login path authenticates against
    pub login_field: IdentifierField,
    /// Fields that must be non-empty at registration
    pub required_at_registration: &'static [&'static str],
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            login_field: IdentifierField::Email,
            required_at_registration: &[
                "username",
                "email",
                "phone",
                "password",
                "password_confirm",
            ],
        }
    }
}
