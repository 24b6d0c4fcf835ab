//! Error type definitions for validation, authentication and verification
//!
//! Each error family maps onto `ante_shared::types::response::ErrorResponse`
//! with a stable machine-readable code, so the presentation layer can render
//! failures consistently regardless of which flow produced them.

use ante_shared::types::response::ErrorResponse;
use thiserror::Error;

use super::DomainError;

/// Input validation errors
///
/// These are always field-attributed where a field applies; they are
/// surfaced to the caller as structured failures, never swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field is missing: {field}")]
    MissingField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("The two password fields do not match")]
    PasswordMismatch,

    #[error("{field} already exists")]
    DuplicateIdentifier { field: String },

    #[error("New {field} equals the current value")]
    NoChange { field: String },

    #[error("The submitted password is not valid")]
    InvalidCredentials,
}

/// Authentication (login) errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("A phone number or username is required")]
    MissingIdentifier,

    #[error("No account matches the given identifier and password")]
    InvalidCredentials,

    #[error("This account is inactive")]
    InactiveAccount,
}

/// Identifier verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Identifier is already verified")]
    AlreadyVerified,

    #[error("The provided code is invalid")]
    InvalidCode,

    #[error("Activation token is invalid or expired")]
    InvalidOrExpiredToken,

    #[error("Token does not reference a known account")]
    UnknownAccount,
}

/// External provider failures
///
/// Transient by definition: timeouts and 5xx-class failures from the
/// verification provider or the mail transport land here. Eligible for a
/// single automatic retry, unlike every business-rule error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{provider} unavailable: {reason}")]
    Unavailable { provider: String, reason: String },
}

/// Registration outcome errors
///
/// Validation failures accumulate so the caller sees every rejected field
/// in one pass; anything else propagates as a domain error.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Registration input rejected")]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::PasswordMismatch => "PASSWORD_MISMATCH",
            ValidationError::DuplicateIdentifier { .. } => "DUPLICATE_IDENTIFIER",
            ValidationError::NoChange { .. } => "NO_CHANGE",
            ValidationError::InvalidCredentials => "INVALID_CREDENTIALS",
        };

        let response = ErrorResponse::new(error_code, err.to_string());
        match &err {
            ValidationError::MissingField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::DuplicateIdentifier { field }
            | ValidationError::NoChange { field } => {
                response.with_detail("field", serde_json::json!(field))
            }
            _ => response,
        }
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::MissingIdentifier => "MISSING_IDENTIFIER",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::InactiveAccount => "INACTIVE_ACCOUNT",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert VerificationError to ErrorResponse
impl From<VerificationError> for ErrorResponse {
    fn from(err: VerificationError) -> Self {
        let error_code = match &err {
            VerificationError::AlreadyVerified => "ALREADY_VERIFIED",
            VerificationError::InvalidCode => "INVALID_CODE",
            VerificationError::InvalidOrExpiredToken => "INVALID_OR_EXPIRED_TOKEN",
            VerificationError::UnknownAccount => "UNKNOWN_ACCOUNT",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ProviderError to ErrorResponse
impl From<ProviderError> for ErrorResponse {
    fn from(err: ProviderError) -> Self {
        ErrorResponse::new("PROVIDER_UNAVAILABLE", err.to_string())
    }
}
