//! In-memory phone verifier for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::ProviderError;

use super::traits::PhoneVerifier;

/// A code outstanding at the provider for one phone number
#[derive(Debug, Clone)]
pub struct VerificationAttempt {
    /// The issued one-time code
    pub code: String,
    /// When the code was issued
    pub issued_at: DateTime<Utc>,
}

/// In-memory verifier modeling the provider-side code lifecycle
///
/// Mirrors the real provider's contract: one live code per phone, a new
/// `send` replaces the old code, and a successful `check` consumes it.
pub struct MockPhoneVerifier {
    attempts: Arc<RwLock<HashMap<String, VerificationAttempt>>>,
    next_code: RwLock<String>,
    fail_calls_remaining: AtomicU32,
}

impl MockPhoneVerifier {
    /// Create a verifier that issues `777777` until told otherwise
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(HashMap::new())),
            next_code: RwLock::new("777777".to_string()),
            fail_calls_remaining: AtomicU32::new(0),
        }
    }

    /// Set the code the next `send` will issue
    pub async fn set_next_code(&self, code: impl Into<String>) {
        *self.next_code.write().await = code.into();
    }

    /// Make the next `n` provider calls fail as unavailable
    pub fn fail_next_calls(&self, n: u32) {
        self.fail_calls_remaining.store(n, Ordering::SeqCst);
    }

    /// The code currently outstanding for a phone, if any
    pub async fn issued_code(&self, phone: &str) -> Option<String> {
        self.attempts
            .read()
            .await
            .get(phone)
            .map(|attempt| attempt.code.clone())
    }

    fn outage(&self) -> Option<ProviderError> {
        // Decrement-if-positive; several tests drive multi-call outages.
        let remaining = self.fail_calls_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.fail_calls_remaining.store(remaining - 1, Ordering::SeqCst);
            Some(ProviderError::Unavailable {
                provider: "mock verify".to_string(),
                reason: "induced outage".to_string(),
            })
        } else {
            None
        }
    }
}

impl Default for MockPhoneVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhoneVerifier for MockPhoneVerifier {
    async fn send(&self, phone: &str) -> Result<(), ProviderError> {
        if let Some(outage) = self.outage() {
            return Err(outage);
        }

        let code = self.next_code.read().await.clone();
        // Replacing the entry is what invalidates the prior code.
        self.attempts.write().await.insert(
            phone.to_string(),
            VerificationAttempt {
                code,
                issued_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn check(&self, phone: &str, code: &str) -> Result<bool, ProviderError> {
        if let Some(outage) = self.outage() {
            return Err(outage);
        }

        let mut attempts = self.attempts.write().await;
        match attempts.get(phone) {
            Some(attempt) if attempt.code == code => {
                // A code checks out at most once.
                attempts.remove(phone);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
