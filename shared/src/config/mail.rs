//! Outbound mail configuration

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP mail API client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Base URL of the mail API endpoint
    pub api_url: String,

    /// API key used as a bearer token
    pub api_key: String,

    /// Sender address for all outbound mail
    pub from_address: String,

    /// Display name for the sender
    pub from_name: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.sendgrid.com/v3/mail/send"),
            api_key: String::new(),
            from_address: String::from("no-reply@anteroom.app"),
            from_name: String::from("Anteroom"),
            request_timeout_secs: 10,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or_default(),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or(defaults.from_name),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
