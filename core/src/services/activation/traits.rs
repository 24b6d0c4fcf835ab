//! Trait for the outbound mail transport

use async_trait::async_trait;

use crate::errors::ProviderError;

/// Outbound mail capability
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a plain-text message to a single recipient
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<(), ProviderError>;
}
