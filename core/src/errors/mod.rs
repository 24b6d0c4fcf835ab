//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{
    AuthError, ProviderError, RegistrationError, ValidationError, VerificationError,
};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type DomainResult<T> = Result<T, DomainError>;
