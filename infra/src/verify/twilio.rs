//! Twilio Verify client
//!
//! Implements the core's `PhoneVerifier` trait against the Twilio Verify
//! v2 API. All code state lives on Twilio's side: starting a verification
//! invalidates the previous code for that phone, and a successful check
//! consumes the verification.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use ante_core::errors::ProviderError;
use ante_core::services::verification::PhoneVerifier;
use ante_shared::config::VerifyConfig;
use ante_shared::utils::phone::mask_phone;

use crate::InfrastructureError;

const PROVIDER_NAME: &str = "twilio-verify";

/// Twilio Verify API client
#[derive(Debug)]
pub struct TwilioVerifyService {
    client: reqwest::Client,
    config: VerifyConfig,
}

#[derive(Debug, Deserialize)]
struct VerificationCheckResponse {
    status: String,
}

impl TwilioVerifyService {
    /// Create a new Twilio Verify client
    pub fn new(config: VerifyConfig) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            return Err(InfrastructureError::Config(
                "Twilio Verify credentials are not configured".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Verify(format!("Failed to build client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(VerifyConfig::from_env())
    }

    fn verifications_url(&self) -> String {
        format!(
            "https://verify.twilio.com/v2/Services/{}/Verifications",
            self.config.service_sid
        )
    }

    fn verification_check_url(&self) -> String {
        format!(
            "https://verify.twilio.com/v2/Services/{}/VerificationCheck",
            self.config.service_sid
        )
    }

    // Timeouts and connection failures surface as transport errors and are
    // treated as transient, like 5xx and 429 responses.
    fn transport_error(err: reqwest::Error) -> ProviderError {
        ProviderError::Unavailable {
            provider: PROVIDER_NAME.to_string(),
            reason: err.to_string(),
        }
    }

    fn is_transient(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    fn status_error(status: StatusCode) -> ProviderError {
        ProviderError::Unavailable {
            provider: PROVIDER_NAME.to_string(),
            reason: format!("request rejected with status {}", status),
        }
    }
}

#[async_trait]
impl PhoneVerifier for TwilioVerifyService {
    async fn send(&self, phone: &str) -> Result<(), ProviderError> {
        let response = self
            .client
            .post(self.verifications_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[("To", phone), ("Channel", "sms")])
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(
                phone = %mask_phone(phone),
                "Started a Twilio verification"
            );
            return Ok(());
        }

        tracing::error!(
            phone = %mask_phone(phone),
            status = %status,
            transient = Self::is_transient(status),
            "Twilio verification start failed"
        );
        Err(Self::status_error(status))
    }

    async fn check(&self, phone: &str, code: &str) -> Result<bool, ProviderError> {
        let response = self
            .client
            .post(self.verification_check_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[("To", phone), ("Code", code)])
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();

        // Twilio answers 404 when no verification is pending for this
        // phone (consumed, expired, or never requested). That is a failed
        // check, not an outage.
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            tracing::error!(
                phone = %mask_phone(phone),
                status = %status,
                transient = Self::is_transient(status),
                "Twilio verification check failed"
            );
            return Err(Self::status_error(status));
        }

        let body: VerificationCheckResponse =
            response.json().await.map_err(Self::transport_error)?;
        Ok(body.status == "approved")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> VerifyConfig {
        VerifyConfig {
            account_sid: "ACtest".to_string(),
            auth_token: "token".to_string(),
            service_sid: "VAtest".to_string(),
            request_timeout_secs: 10,
        }
    }

    #[test]
    fn test_urls_embed_the_service_sid() {
        let service = TwilioVerifyService::new(test_config()).unwrap();
        assert_eq!(
            service.verifications_url(),
            "https://verify.twilio.com/v2/Services/VAtest/Verifications"
        );
        assert_eq!(
            service.verification_check_url(),
            "https://verify.twilio.com/v2/Services/VAtest/VerificationCheck"
        );
    }

    #[test]
    fn test_missing_credentials_are_rejected() {
        let err = TwilioVerifyService::new(VerifyConfig::default()).unwrap_err();
        assert!(matches!(err, InfrastructureError::Config(_)));
    }

    #[test]
    fn test_transient_status_classification() {
        assert!(TwilioVerifyService::is_transient(
            StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(TwilioVerifyService::is_transient(StatusCode::BAD_GATEWAY));
        assert!(TwilioVerifyService::is_transient(
            StatusCode::TOO_MANY_REQUESTS
        ));
        assert!(!TwilioVerifyService::is_transient(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_check_response_parsing() {
        let approved: VerificationCheckResponse =
            serde_json::from_str(r#"{"status": "approved", "sid": "VE123"}"#).unwrap();
        assert_eq!(approved.status, "approved");

        let pending: VerificationCheckResponse =
            serde_json::from_str(r#"{"status": "pending"}"#).unwrap();
        assert_eq!(pending.status, "pending");
    }
}
