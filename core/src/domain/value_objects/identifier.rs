//! Identifier fields usable to look up an account.

use serde::{Deserialize, Serialize};

/// A unique-per-account field usable to resolve an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierField {
    /// The unique username
    Username,
    /// The unique email address
    Email,
    /// The unique phone number
    Phone,
}

impl IdentifierField {
    /// Field name as it appears in input payloads and error reports
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierField::Username => "username",
            IdentifierField::Email => "email",
            IdentifierField::Phone => "phone",
        }
    }
}

impl std::fmt::Display for IdentifierField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
