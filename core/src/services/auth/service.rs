//! Main authentication service implementation

use std::sync::Arc;

use ante_shared::utils::phone::mask_phone;

use crate::domain::value_objects::credentials::{LoginCredentials, LoginOutcome, SessionLifetime};
use crate::errors::{AuthError, DomainResult};

use super::authenticator::Authenticator;

/// Authentication service mapping submitted credentials to a login outcome
pub struct AuthService<A>
where
    A: Authenticator,
{
    /// Credential resolution capability
    authenticator: Arc<A>,
}

impl<A> AuthService<A>
where
    A: Authenticator,
{
    /// Create a new authentication service
    pub fn new(authenticator: Arc<A>) -> Self {
        Self { authenticator }
    }

    /// Authenticate a login attempt
    ///
    /// Resolution rules:
    /// 1. Either a phone number or a username-style identifier must be
    ///    present; otherwise the attempt fails with `MissingIdentifier`.
    /// 2. Exactly one authentication path is attempted per call: phone
    ///    when present, the username field otherwise.
    /// 3. An unknown identifier and a wrong password both surface as
    ///    `InvalidCredentials`, so callers cannot enumerate identifiers.
    /// 4. With `remember_me` set, an inactive account is rejected with
    ///    `InactiveAccount`; without it the inactivity check is skipped
    ///    and the session is scoped to the browser session.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginOutcome)` - the account plus the session lifetime to apply
    /// * `Err(DomainError)` - a typed authentication failure
    pub async fn login(&self, credentials: &LoginCredentials) -> DomainResult<LoginOutcome> {
        let identifier = credentials
            .phone_identifier()
            .or_else(|| credentials.username_identifier());

        let Some(identifier) = identifier else {
            return Err(AuthError::MissingIdentifier.into());
        };

        let account = self
            .authenticator
            .resolve(credentials)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if credentials.remember_me && !account.is_active {
            tracing::warn!(
                account_id = %account.id,
                event = "login_rejected_inactive",
                "Inactive account rejected for persistent login"
            );
            return Err(AuthError::InactiveAccount.into());
        }

        let session = if credentials.remember_me {
            SessionLifetime::Persistent
        } else {
            SessionLifetime::Browser
        };

        tracing::info!(
            account_id = %account.id,
            identifier = %mask_identifier(identifier),
            session = ?session,
            event = "login_succeeded",
            "Credentials resolved to an account"
        );

        Ok(LoginOutcome { account, session })
    }
}

// Phone-shaped identifiers get the phone mask; anything else is elided
// entirely since emails don't mask well.
fn mask_identifier(identifier: &str) -> String {
    if identifier.starts_with('+') || identifier.chars().all(|c| c.is_ascii_digit()) {
        mask_phone(identifier)
    } else {
        "<username>".to_string()
    }
}
