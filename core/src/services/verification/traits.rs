//! Trait for the one-time-code verification provider

use async_trait::async_trait;

use crate::errors::ProviderError;

/// External one-time-code capability
///
/// The provider owns all code state: it keeps at most one live code per
/// phone number, and issuing a new code invalidates the previous one.
/// Nothing code-related is persisted on this side of the boundary.
#[async_trait]
pub trait PhoneVerifier: Send + Sync {
    /// Issue a fresh one-time code to the given phone number
    ///
    /// Any previously outstanding code for this phone stops being valid.
    async fn send(&self, phone: &str) -> Result<(), ProviderError>;

    /// Check a submitted code against the one last issued for this phone
    async fn check(&self, phone: &str, code: &str) -> Result<bool, ProviderError>;
}
