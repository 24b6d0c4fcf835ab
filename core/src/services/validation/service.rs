//! Credential validator implementation

use std::sync::Arc;

use ante_shared::utils::phone::is_valid_phone;
use ante_shared::utils::validation::validators;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::identifier::IdentifierField;
use crate::domain::value_objects::registration::{RegistrationRequest, ValidatedRegistration};
use crate::errors::{DomainError, DomainResult, RegistrationError, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::auth::{IdentifierConfig, PasswordHasher};

/// Validator for registration and account-update input
///
/// Every check is a function of the submitted input and the committed
/// account state; nothing here mutates anything.
pub struct CredentialValidator<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    config: IdentifierConfig,
}

impl<R, H> CredentialValidator<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    /// Create a new validator
    pub fn new(repository: Arc<R>, hasher: Arc<H>, config: IdentifierConfig) -> Self {
        Self {
            repository,
            hasher,
            config,
        }
    }

    /// Validate registration input
    ///
    /// All rule violations accumulate so the caller sees every rejected
    /// field at once:
    /// - `MissingField` for each empty required field
    /// - `InvalidFormat` for undeliverable email/phone shapes
    /// - `PasswordMismatch` when the two password fields differ
    /// - `DuplicateIdentifier` when the email or phone is already taken
    pub async fn validate_registration(
        &self,
        request: &RegistrationRequest,
    ) -> Result<ValidatedRegistration, RegistrationError> {
        let mut errors = Vec::new();

        for &field in self.config.required_at_registration {
            let value = match field {
                "username" => &request.username,
                "email" => &request.email,
                "phone" => &request.phone,
                "password" => &request.password,
                "password_confirm" => &request.password_confirm,
                _ => continue,
            };
            if !validators::not_empty(value) {
                errors.push(ValidationError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        if validators::not_empty(&request.email) && !validators::is_valid_email(&request.email) {
            errors.push(ValidationError::InvalidFormat {
                field: "email".to_string(),
            });
        }
        if validators::not_empty(&request.phone) && !is_valid_phone(&request.phone) {
            errors.push(ValidationError::InvalidFormat {
                field: "phone".to_string(),
            });
        }

        if validators::not_empty(&request.password)
            && validators::not_empty(&request.password_confirm)
            && request.password != request.password_confirm
        {
            errors.push(ValidationError::PasswordMismatch);
        }

        if validators::not_empty(&request.email)
            && self.repository.exists_by_email(&request.email).await?
        {
            errors.push(ValidationError::DuplicateIdentifier {
                field: "email".to_string(),
            });
        }
        if validators::not_empty(&request.phone)
            && self.repository.exists_by_phone(&request.phone).await?
        {
            errors.push(ValidationError::DuplicateIdentifier {
                field: "phone".to_string(),
            });
        }

        if !errors.is_empty() {
            return Err(RegistrationError::Invalid(errors));
        }

        Ok(ValidatedRegistration {
            username: request.username.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.trim().to_string(),
            password: request.password.clone(),
        })
    }

    /// Validate a change of the email or phone identifier
    ///
    /// Fails with `NoChange` when the new value equals the current one and
    /// with `DuplicateIdentifier` when another account already owns it.
    pub async fn validate_identifier_change(
        &self,
        account: &Account,
        new_value: &str,
        field: IdentifierField,
    ) -> DomainResult<()> {
        let new_value = new_value.trim();
        if !validators::not_empty(new_value) {
            return Err(ValidationError::MissingField {
                field: field.to_string(),
            }
            .into());
        }

        let (current, taken_by) = match field {
            IdentifierField::Email => {
                if !validators::is_valid_email(new_value) {
                    return Err(ValidationError::InvalidFormat {
                        field: field.to_string(),
                    }
                    .into());
                }
                (
                    account.email.as_str(),
                    self.repository.find_by_email(new_value).await?,
                )
            }
            IdentifierField::Phone => {
                if !is_valid_phone(new_value) {
                    return Err(ValidationError::InvalidFormat {
                        field: field.to_string(),
                    }
                    .into());
                }
                (
                    account.phone.as_str(),
                    self.repository.find_by_phone(new_value).await?,
                )
            }
            IdentifierField::Username => {
                return Err(DomainError::Internal {
                    message: "username is not an updatable identifier".to_string(),
                });
            }
        };

        if current == new_value {
            return Err(ValidationError::NoChange {
                field: field.to_string(),
            }
            .into());
        }

        if taken_by.map_or(false, |other| other.id != account.id) {
            return Err(ValidationError::DuplicateIdentifier {
                field: field.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Validate that the submitted password matches the stored credential
    pub fn validate_password_confirmation(
        &self,
        account: &Account,
        submitted_password: &str,
    ) -> Result<(), ValidationError> {
        if self
            .hasher
            .verify(submitted_password, &account.password_hash)
        {
            Ok(())
        } else {
            Err(ValidationError::InvalidCredentials)
        }
    }
}
