//! SendGrid mail transport
//!
//! Implements the core's `Mailer` trait against the SendGrid v3 send
//! endpoint. Delivery beyond the API handoff is the provider's problem.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use ante_core::errors::ProviderError;
use ante_core::services::activation::Mailer;
use ante_shared::config::MailConfig;

use crate::InfrastructureError;

const PROVIDER_NAME: &str = "sendgrid";

/// SendGrid HTTP mail client
#[derive(Debug)]
pub struct SendGridMailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl SendGridMailer {
    /// Create a new SendGrid client
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "Mail API key is not configured".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Mail(format!("Failed to build client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(MailConfig::from_env())
    }

    fn payload(&self, subject: &str, body: &str, recipient: &str) -> serde_json::Value {
        serde_json::json!({
            "personalizations": [{ "to": [{ "email": recipient }] }],
            "from": {
                "email": self.config.from_address,
                "name": self.config.from_name,
            },
            "subject": subject,
            "content": [{ "type": "text/plain", "value": body }],
        })
    }

    fn transport_error(err: reqwest::Error) -> ProviderError {
        ProviderError::Unavailable {
            provider: PROVIDER_NAME.to_string(),
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<(), ProviderError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&self.payload(subject, body, recipient))
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(subject = subject, "Mail accepted by provider");
            return Ok(());
        }

        tracing::error!(
            status = %status,
            subject = subject,
            "Mail provider rejected the message"
        );
        Err(ProviderError::Unavailable {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("request rejected with status {}", status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailer() -> SendGridMailer {
        SendGridMailer::new(MailConfig {
            api_key: "SG.test".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let err = SendGridMailer::new(MailConfig::default()).unwrap_err();
        assert!(matches!(err, InfrastructureError::Config(_)));
    }

    #[test]
    fn test_payload_shape() {
        let payload = mailer().payload("Activate your account.", "body text", "test@test.test");

        assert_eq!(
            payload["personalizations"][0]["to"][0]["email"],
            "test@test.test"
        );
        assert_eq!(payload["subject"], "Activate your account.");
        assert_eq!(payload["content"][0]["type"], "text/plain");
        assert_eq!(payload["content"][0]["value"], "body text");
        assert_eq!(payload["from"]["email"], "no-reply@anteroom.app");
    }
}
