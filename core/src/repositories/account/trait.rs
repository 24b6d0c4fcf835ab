//! Account repository trait defining the interface for account persistence.
//!
//! Implementations own the actual storage operations while keeping the
//! abstraction boundary between the domain and infrastructure layers. The
//! storage layer is the final authority on identifier uniqueness: any
//! application-level pre-check can lose a race, and `create`/`update` must
//! then fail with the same `DuplicateIdentifier` error the pre-check would
//! have produced.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique username
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError::ValidationErr(ValidationError::DuplicateIdentifier))` -
    ///   a unique index rejected the username, email or phone
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Persist changes to an existing account
    ///
    /// Fails with `DuplicateIdentifier` when a changed identifier collides
    /// with another account at commit time, and with `NotFound` when the
    /// account no longer exists.
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Check whether any account owns the given email address
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether any account owns the given phone number
    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError>;

    /// Record proof of phone control, only if not already recorded
    ///
    /// The check and the write are a single atomic storage operation, so
    /// concurrent confirmations for the same account cannot both win.
    ///
    /// # Returns
    /// * `Ok(true)` - this call performed the transition
    /// * `Ok(false)` - the phone was already verified
    async fn mark_phone_verified(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<bool, DomainError>;

    /// Record proof of email control, keeping any earlier timestamp
    ///
    /// Idempotent: repeated calls succeed and the first transition point is
    /// preserved.
    ///
    /// # Returns
    /// * `Ok(at)` - the effective verification timestamp after the call
    async fn mark_email_verified(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, DomainError>;
}
