//! Configuration for the phone verification service

/// Length of the one-time verification code
pub const CODE_LENGTH: usize = 6;

/// Configuration for the phone verification service
#[derive(Debug, Clone)]
pub struct PhoneVerificationConfig {
    /// Expected one-time code length
    pub code_length: usize,
    /// Whether to retry a provider call once when it reports itself
    /// unavailable
    pub retry_unavailable: bool,
}

impl Default for PhoneVerificationConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            retry_unavailable: true,
        }
    }
}
