//! Account entity representing a registered user of the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity representing a registered user
///
/// `username`, `email` and `phone` are each unique across all accounts;
/// the storage layer enforces this with unique indexes. The two
/// `*_verified_at` fields are non-null exactly when control of the
/// corresponding identifier has been proven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique display/login name
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Unique phone number (E.164 format)
    pub phone: String,

    /// Hashed password credential
    pub password_hash: String,

    /// Optional profile first name
    pub first_name: Option<String>,

    /// Optional profile last name
    pub last_name: Option<String>,

    /// Whether the account may authenticate
    pub is_active: bool,

    /// When control of the phone number was proven, if ever
    pub phone_verified_at: Option<DateTime<Utc>>,

    /// When control of the email address was proven, if ever
    pub email_verified_at: Option<DateTime<Utc>>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new active, unverified account
    pub fn new(
        username: String,
        email: String,
        phone: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            phone,
            password_hash,
            first_name: None,
            last_name: None,
            is_active: true,
            phone_verified_at: None,
            email_verified_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the phone number has been verified
    pub fn is_phone_verified(&self) -> bool {
        self.phone_verified_at.is_some()
    }

    /// Checks whether the email address has been verified
    pub fn is_email_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }

    /// Records proof of control over the phone number
    pub fn verify_phone(&mut self) {
        self.phone_verified_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Records proof of control over the email address
    ///
    /// Keeps the first transition timestamp if the email is already
    /// verified.
    pub fn verify_email(&mut self) {
        if self.email_verified_at.is_none() {
            self.email_verified_at = Some(Utc::now());
        }
        self.updated_at = Utc::now();
    }

    /// Replaces the email address
    ///
    /// Clears `email_verified_at`: the previous proof applied to the old
    /// address.
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.email_verified_at = None;
        self.updated_at = Utc::now();
    }

    /// Replaces the phone number
    ///
    /// Clears `phone_verified_at`: the previous proof applied to the old
    /// number.
    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
        self.phone_verified_at = None;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Updates the profile name fields
    pub fn set_profile_names(&mut self, first_name: String, last_name: String) {
        self.first_name = Some(first_name);
        self.last_name = Some(last_name);
        self.updated_at = Utc::now();
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivates the account
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(
            "TestUser".to_string(),
            "test@test.test".to_string(),
            "+201005263988".to_string(),
            "hashed_secret".to_string(),
        )
    }

    #[test]
    fn test_new_account_defaults() {
        let account = account();

        assert_eq!(account.username, "TestUser");
        assert_eq!(account.email, "test@test.test");
        assert_eq!(account.phone, "+201005263988");
        assert!(account.is_active);
        assert!(!account.is_phone_verified());
        assert!(!account.is_email_verified());
        assert!(account.first_name.is_none());
        assert!(account.last_name.is_none());
    }

    #[test]
    fn test_verify_phone() {
        let mut account = account();

        account.verify_phone();
        assert!(account.is_phone_verified());
    }

    #[test]
    fn test_verify_email_keeps_first_timestamp() {
        let mut account = account();

        account.verify_email();
        let first = account.email_verified_at;
        assert!(first.is_some());

        account.verify_email();
        assert_eq!(account.email_verified_at, first);
    }

    #[test]
    fn test_set_email_clears_verification() {
        let mut account = account();
        account.verify_email();

        account.set_email("newtest@test.com".to_string());
        assert_eq!(account.email, "newtest@test.com");
        assert!(!account.is_email_verified());
    }

    #[test]
    fn test_set_phone_clears_verification() {
        let mut account = account();
        account.verify_phone();

        account.set_phone("+201005263977".to_string());
        assert_eq!(account.phone, "+201005263977");
        assert!(!account.is_phone_verified());
    }

    #[test]
    fn test_activation_toggle() {
        let mut account = account();

        account.deactivate();
        assert!(!account.is_active);
        account.activate();
        assert!(account.is_active);
    }

    #[test]
    fn test_serialization_round_trip() {
        let account = account();
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }
}
