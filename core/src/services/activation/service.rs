//! Email verification service implementation

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, DomainResult, ProviderError, VerificationError};
use crate::repositories::AccountRepository;

use super::token::ActivationTokenService;
use super::traits::Mailer;

/// Subject line of the activation email
pub const ACTIVATION_EMAIL_SUBJECT: &str = "Activate your account.";

/// Service driving the email `Unverified -> Verified` transition
pub struct EmailVerificationService<M, R>
where
    M: Mailer,
    R: AccountRepository,
{
    /// Outbound mail transport
    mailer: Arc<M>,
    /// Account repository for recording the proof
    repository: Arc<R>,
    /// Activation token issuer
    tokens: Arc<ActivationTokenService>,
}

impl<M, R> EmailVerificationService<M, R>
where
    M: Mailer,
    R: AccountRepository,
{
    /// Create a new email verification service
    pub fn new(mailer: Arc<M>, repository: Arc<R>, tokens: Arc<ActivationTokenService>) -> Self {
        Self {
            mailer,
            repository,
            tokens,
        }
    }

    /// Mint an activation token and mail the activation link
    ///
    /// Can be called any number of times; each link stays valid until it
    /// expires or the password changes.
    pub async fn request_link(&self, account: &Account) -> DomainResult<()> {
        let token = self.tokens.make_token(account)?;
        let link = self.tokens.activation_link(&token);
        let body = format!(
            "Hi {},\n\n\
             Please confirm your email address by opening the link below:\n\n\
             {}\n\n\
             If you did not create an account, no further action is required.\n",
            account.username, link
        );

        self.send_with_retry(ACTIVATION_EMAIL_SUBJECT, &body, &account.email)
            .await?;

        tracing::info!(
            account_id = %account.id,
            event = "activation_email_sent",
            "Sent email activation link"
        );
        Ok(())
    }

    /// Confirm an activation token and record the proof
    ///
    /// Idempotent: confirming an already-verified email with a still-valid
    /// token succeeds again and keeps the original transition timestamp.
    pub async fn confirm(&self, token: &str) -> DomainResult<()> {
        let claims = self.tokens.verify_token(token)?;

        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| VerificationError::InvalidOrExpiredToken)?;
        let account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(VerificationError::UnknownAccount)?;

        if !self.tokens.matches_freshness(&claims, &account) {
            // Minted against an older credential state, e.g. before a
            // password change.
            return Err(VerificationError::InvalidOrExpiredToken.into());
        }

        self.repository
            .mark_email_verified(account.id, Utc::now())
            .await?;

        tracing::info!(
            account_id = %account.id,
            event = "email_verified",
            "Email address verified"
        );
        Ok(())
    }

    // One retry at most: mail-provider hiccups are transient, everything
    // else is not worth hammering.
    async fn send_with_retry(
        &self,
        subject: &str,
        body: &str,
        recipient: &str,
    ) -> DomainResult<()> {
        match self.mailer.send(subject, body, recipient).await {
            Ok(()) => Ok(()),
            Err(err @ ProviderError::Unavailable { .. }) => {
                tracing::warn!(
                    error = %err,
                    event = "provider_retry",
                    "Mail transport unavailable, retrying once"
                );
                self.mailer
                    .send(subject, body, recipient)
                    .await
                    .map_err(DomainError::from)
            }
        }
    }
}
