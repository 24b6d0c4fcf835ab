//! Credential resolution capability

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::credentials::LoginCredentials;
use crate::domain::value_objects::identifier::IdentifierField;
use crate::errors::DomainResult;
use crate::repositories::AccountRepository;

use super::config::IdentifierConfig;
use super::password::PasswordHasher;

/// Opaque authentication capability
///
/// Resolves submitted credentials to at most one account. Returning
/// `Ok(None)` covers both an unknown identifier and a wrong password, so
/// callers cannot distinguish the two.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve credentials to the matching account, if any
    async fn resolve(&self, credentials: &LoginCredentials) -> DomainResult<Option<Account>>;
}

/// Default authenticator backed by the account repository
///
/// Looks the account up by exactly one identifier - the phone number when
/// present, otherwise the configured username-style field - and verifies
/// the password against the stored hash.
pub struct RepositoryAuthenticator<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    config: IdentifierConfig,
}

impl<R, H> RepositoryAuthenticator<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    /// Create a new repository-backed authenticator
    pub fn new(repository: Arc<R>, hasher: Arc<H>, config: IdentifierConfig) -> Self {
        Self {
            repository,
            hasher,
            config,
        }
    }
}

#[async_trait]
impl<R, H> Authenticator for RepositoryAuthenticator<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    async fn resolve(&self, credentials: &LoginCredentials) -> DomainResult<Option<Account>> {
        // Exactly one lookup path per call. A failed phone lookup does not
        // fall through to the username path.
        let account = if let Some(phone) = credentials.phone_identifier() {
            self.repository.find_by_phone(phone).await?
        } else if let Some(username) = credentials.username_identifier() {
            match self.config.login_field {
                IdentifierField::Email => self.repository.find_by_email(username).await?,
                IdentifierField::Username => self.repository.find_by_username(username).await?,
                IdentifierField::Phone => self.repository.find_by_phone(username).await?,
            }
        } else {
            None
        };

        Ok(account
            .filter(|account| self.hasher.verify(&credentials.password, &account.password_hash)))
    }
}
