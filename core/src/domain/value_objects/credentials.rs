//! Login credential and outcome value objects.

use serde::{Deserialize, Serialize};

use crate::domain::entities::account::Account;

/// Credentials submitted for a login attempt
///
/// Either `phone` or `username` identifies the account; when both are
/// present the phone path wins and the username is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Phone number identifier, if logging in by phone
    pub phone: Option<String>,

    /// Username-style identifier (email by default configuration)
    pub username: Option<String>,

    /// Plaintext password as submitted
    pub password: String,

    /// Whether the session should outlive the browser session
    pub remember_me: bool,
}

impl LoginCredentials {
    /// Credentials identifying the account by phone number
    pub fn with_phone(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            username: None,
            password: password.into(),
            remember_me: false,
        }
    }

    /// Credentials identifying the account by the username-style field
    pub fn with_username(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: None,
            username: Some(username.into()),
            password: password.into(),
            remember_me: false,
        }
    }

    /// Request a session that survives browser restarts
    pub fn remembered(mut self) -> Self {
        self.remember_me = true;
        self
    }

    /// The phone identifier, trimmed, if actually usable
    pub fn phone_identifier(&self) -> Option<&str> {
        self.phone.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// The username identifier, trimmed, if actually usable
    pub fn username_identifier(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Lifetime policy for the session issued after a successful login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionLifetime {
    /// Session credentials expire when the browser session ends
    Browser,
    /// Session credentials persist across browser restarts
    Persistent,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated account
    pub account: Account,
    /// Session lifetime the caller should apply
    pub session: SessionLifetime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_identifier_trims_and_filters() {
        let credentials = LoginCredentials::with_phone("  +201005263988  ", "secret");
        assert_eq!(credentials.phone_identifier(), Some("+201005263988"));

        let credentials = LoginCredentials::with_phone("   ", "secret");
        assert_eq!(credentials.phone_identifier(), None);
    }

    #[test]
    fn test_remembered_builder() {
        let credentials = LoginCredentials::with_username("test@test.test", "secret").remembered();
        assert!(credentials.remember_me);
    }
}
