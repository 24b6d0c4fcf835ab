//! Phone verification provider configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Twilio Verify client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyConfig {
    /// Twilio Account SID
    pub account_sid: String,

    /// Twilio Auth Token
    pub auth_token: String,

    /// Verify service SID (the `VA...` identifier)
    pub service_sid: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            service_sid: String::new(),
            request_timeout_secs: 10,
        }
    }
}

impl VerifyConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            service_sid: std::env::var("TWILIO_VERIFY_SERVICE_SID").unwrap_or_default(),
            request_timeout_secs: std::env::var("TWILIO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Check that all required credentials are present
    pub fn is_configured(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty() && !self.service_sid.is_empty()
    }
}
