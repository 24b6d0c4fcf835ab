//! Configuration for activation tokens

/// Configuration for the activation token issuer
#[derive(Debug, Clone)]
pub struct ActivationTokenConfig {
    /// Symmetric signing secret
    pub secret: String,

    /// Hours an activation link stays valid
    pub validity_hours: i64,

    /// Issuer claim embedded in every token
    pub issuer: String,

    /// Base URL the activation token is appended to when building links
    pub activation_url_base: String,
}

impl Default for ActivationTokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-this-secret-in-production"),
            validity_hours: 72,
            issuer: String::from("anteroom"),
            activation_url_base: String::from("https://anteroom.app/accounts/verify-email"),
        }
    }
}

impl ActivationTokenConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("ACTIVATION_TOKEN_SECRET").unwrap_or(defaults.secret),
            validity_hours: std::env::var("ACTIVATION_TOKEN_VALIDITY_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.validity_hours),
            issuer: std::env::var("ACTIVATION_TOKEN_ISSUER").unwrap_or(defaults.issuer),
            activation_url_base: std::env::var("ACTIVATION_URL_BASE")
                .unwrap_or(defaults.activation_url_base),
        }
    }
}
