//! Phone verification service implementation

use std::sync::Arc;

use chrono::Utc;

use ante_shared::utils::phone::mask_phone;

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, DomainResult, ProviderError, VerificationError};
use crate::repositories::AccountRepository;

use super::config::PhoneVerificationConfig;
use super::traits::PhoneVerifier;

/// Service driving the phone `Unverified -> Verified` transition
pub struct PhoneVerificationService<P, R>
where
    P: PhoneVerifier,
    R: AccountRepository,
{
    /// One-time-code provider
    provider: Arc<P>,
    /// Account repository for recording the proof
    repository: Arc<R>,
    /// Service configuration
    config: PhoneVerificationConfig,
}

impl<P, R> PhoneVerificationService<P, R>
where
    P: PhoneVerifier,
    R: AccountRepository,
{
    /// Create a new phone verification service
    pub fn new(provider: Arc<P>, repository: Arc<R>, config: PhoneVerificationConfig) -> Self {
        Self {
            provider,
            repository,
            config,
        }
    }

    /// Request a fresh one-time code for the account's phone number
    ///
    /// The provider invalidates any outstanding code for this phone and
    /// issues a new one. Two concurrent requests for the same phone race:
    /// the last `send` to complete wins and earlier codes stop being
    /// valid. That lost update is expected behavior, not an error.
    pub async fn request_code(&self, account: &Account) -> DomainResult<()> {
        self.send_with_retry(&account.phone).await?;

        tracing::info!(
            account_id = %account.id,
            phone = %mask_phone(&account.phone),
            event = "verification_code_requested",
            "Issued a fresh phone verification code"
        );
        Ok(())
    }

    /// Confirm a submitted one-time code and record the proof
    ///
    /// The already-verified guard runs before the provider is consulted,
    /// so a settled account never burns a valid code check. On a correct
    /// code the transition is recorded with a conditional write; losing
    /// that race to a concurrent confirmation surfaces `AlreadyVerified`
    /// as well.
    pub async fn confirm(&self, account: &Account, submitted_code: &str) -> DomainResult<()> {
        if account.is_phone_verified() {
            return Err(VerificationError::AlreadyVerified.into());
        }

        // Malformed input cannot be the issued code; skip the provider
        // round-trip.
        let submitted_code = submitted_code.trim();
        if submitted_code.len() != self.config.code_length
            || !submitted_code.chars().all(|c| c.is_ascii_digit())
        {
            tracing::warn!(
                account_id = %account.id,
                code_length = submitted_code.len(),
                event = "invalid_code_format",
                "Verification code has the wrong shape"
            );
            return Err(VerificationError::InvalidCode.into());
        }

        let matched = self.check_with_retry(&account.phone, submitted_code).await?;
        if !matched {
            tracing::warn!(
                account_id = %account.id,
                phone = %mask_phone(&account.phone),
                event = "verification_code_rejected",
                "Provider rejected the submitted code"
            );
            return Err(VerificationError::InvalidCode.into());
        }

        let transitioned = self
            .repository
            .mark_phone_verified(account.id, Utc::now())
            .await?;
        if !transitioned {
            // A concurrent confirmation recorded the proof first.
            return Err(VerificationError::AlreadyVerified.into());
        }

        tracing::info!(
            account_id = %account.id,
            phone = %mask_phone(&account.phone),
            event = "phone_verified",
            "Phone number verified"
        );
        Ok(())
    }

    async fn send_with_retry(&self, phone: &str) -> DomainResult<()> {
        match self.provider.send(phone).await {
            Ok(()) => Ok(()),
            Err(err @ ProviderError::Unavailable { .. }) if self.config.retry_unavailable => {
                tracing::warn!(
                    phone = %mask_phone(phone),
                    error = %err,
                    event = "provider_retry",
                    "Verification provider unavailable, retrying once"
                );
                self.provider.send(phone).await.map_err(DomainError::from)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn check_with_retry(&self, phone: &str, code: &str) -> DomainResult<bool> {
        match self.provider.check(phone, code).await {
            Ok(matched) => Ok(matched),
            Err(err @ ProviderError::Unavailable { .. }) if self.config.retry_unavailable => {
                tracing::warn!(
                    phone = %mask_phone(phone),
                    error = %err,
                    event = "provider_retry",
                    "Verification provider unavailable, retrying once"
                );
                self.provider
                    .check(phone, code)
                    .await
                    .map_err(DomainError::from)
            }
            Err(err) => Err(err.into()),
        }
    }
}
