//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, ValidationError};

use super::trait_::AccountRepository;

/// In-memory account repository for testing
///
/// Enforces the same uniqueness contract as the real storage layer so
/// race-condition behavior can be exercised without a database.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository pre-seeded with an account
    pub async fn with_account(account: Account) -> Self {
        let repo = Self::new();
        repo.accounts.write().await.insert(account.id, account);
        repo
    }

    fn duplicate_field(existing: &Account, candidate: &Account) -> Option<&'static str> {
        if existing.username == candidate.username {
            Some("username")
        } else if existing.email == candidate.email {
            Some("email")
        } else if existing.phone == candidate.phone {
            Some("phone")
        } else {
            None
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.phone == phone).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if let Some(field) = accounts
            .values()
            .find_map(|a| Self::duplicate_field(a, &account))
        {
            return Err(DomainError::ValidationErr(
                ValidationError::DuplicateIdentifier {
                    field: field.to_string(),
                },
            ));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }

        if let Some(field) = accounts
            .values()
            .filter(|a| a.id != account.id)
            .find_map(|a| Self::duplicate_field(a, &account))
        {
            return Err(DomainError::ValidationErr(
                ValidationError::DuplicateIdentifier {
                    field: field.to_string(),
                },
            ));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.phone == phone))
    }

    async fn mark_phone_verified(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "Account".to_string(),
        })?;

        if account.phone_verified_at.is_some() {
            return Ok(false);
        }
        account.phone_verified_at = Some(at);
        account.updated_at = at;
        Ok(true)
    }

    async fn mark_email_verified(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "Account".to_string(),
        })?;

        let effective = *account.email_verified_at.get_or_insert(at);
        account.updated_at = at;
        Ok(effective)
    }
}
