//! Account service implementation

use std::sync::Arc;

use ante_shared::utils::validation::validators;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::identifier::IdentifierField;
use crate::domain::value_objects::registration::RegistrationRequest;
use crate::errors::{DomainError, DomainResult, RegistrationError, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::activation::{EmailVerificationService, Mailer};
use crate::services::auth::{IdentifierConfig, PasswordHasher};
use crate::services::validation::CredentialValidator;

/// Service owning account creation and mutation flows
pub struct AccountService<R, H, M>
where
    R: AccountRepository,
    H: PasswordHasher,
    M: Mailer,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    validator: CredentialValidator<R, H>,
    activation: Arc<EmailVerificationService<M, R>>,
}

impl<R, H, M> AccountService<R, H, M>
where
    R: AccountRepository,
    H: PasswordHasher,
    M: Mailer,
{
    /// Create a new account service
    pub fn new(
        repository: Arc<R>,
        hasher: Arc<H>,
        activation: Arc<EmailVerificationService<M, R>>,
        config: IdentifierConfig,
    ) -> Self {
        let validator = CredentialValidator::new(repository.clone(), hasher.clone(), config);
        Self {
            repository,
            hasher,
            validator,
            activation,
        }
    }

    /// Register a new account
    ///
    /// Validates the input, hashes the password, persists the account and
    /// sends the activation email. The account starts active with both
    /// identifiers unverified. A registration that loses a uniqueness race
    /// at commit time surfaces the same `DuplicateIdentifier` the
    /// validator's pre-check would have produced. Activation-mail failure
    /// is logged but does not fail the registration; the link can be
    /// re-requested later.
    pub async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<Account, RegistrationError> {
        let validated = self.validator.validate_registration(&request).await?;

        let password_hash = self
            .hasher
            .hash(&validated.password)
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to hash password: {}", e),
            })?;

        let account = Account::new(
            validated.username,
            validated.email,
            validated.phone,
            password_hash,
        );

        let account = match self.repository.create(account).await {
            Ok(account) => account,
            Err(DomainError::ValidationErr(err)) => {
                return Err(RegistrationError::Invalid(vec![err]));
            }
            Err(err) => return Err(err.into()),
        };

        if let Err(err) = self.activation.request_link(&account).await {
            tracing::warn!(
                account_id = %account.id,
                error = %err,
                event = "activation_email_failed",
                "Registration succeeded but the activation email did not go out"
            );
        }

        tracing::info!(
            account_id = %account.id,
            event = "account_registered",
            "Registered a new account"
        );
        Ok(account)
    }

    /// Change the account's email address
    ///
    /// Requires the current password. The new address starts unverified.
    pub async fn change_email(
        &self,
        account: &Account,
        new_email: &str,
        password: &str,
    ) -> DomainResult<Account> {
        self.validator
            .validate_password_confirmation(account, password)?;
        self.validator
            .validate_identifier_change(account, new_email, IdentifierField::Email)
            .await?;

        let mut updated = account.clone();
        updated.set_email(new_email.trim().to_string());
        let updated = self.repository.update(updated).await?;

        tracing::info!(
            account_id = %updated.id,
            event = "email_changed",
            "Email address updated"
        );
        Ok(updated)
    }

    /// Change the account's phone number
    ///
    /// Requires the current password. The new number starts unverified.
    pub async fn change_phone(
        &self,
        account: &Account,
        new_phone: &str,
        password: &str,
    ) -> DomainResult<Account> {
        self.validator
            .validate_password_confirmation(account, password)?;
        self.validator
            .validate_identifier_change(account, new_phone, IdentifierField::Phone)
            .await?;

        let mut updated = account.clone();
        updated.set_phone(new_phone.trim().to_string());
        let updated = self.repository.update(updated).await?;

        tracing::info!(
            account_id = %updated.id,
            event = "phone_changed",
            "Phone number updated"
        );
        Ok(updated)
    }

    /// Update the profile name fields
    ///
    /// Both names are required.
    pub async fn update_profile(
        &self,
        account: &Account,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<Account> {
        if !validators::not_empty(first_name) {
            return Err(ValidationError::MissingField {
                field: "first_name".to_string(),
            }
            .into());
        }
        if !validators::not_empty(last_name) {
            return Err(ValidationError::MissingField {
                field: "last_name".to_string(),
            }
            .into());
        }

        let mut updated = account.clone();
        updated.set_profile_names(first_name.trim().to_string(), last_name.trim().to_string());
        self.repository.update(updated).await
    }
}
