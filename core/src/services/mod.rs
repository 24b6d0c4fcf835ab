//! Business services containing domain logic and use cases.

pub mod account;
pub mod activation;
pub mod auth;
pub mod validation;
pub mod verification;

// Re-export commonly used types
pub use account::AccountService;
pub use activation::{
    ActivationTokenConfig, ActivationTokenService, EmailVerificationService, Mailer,
};
pub use auth::{
    AuthService, Authenticator, IdentifierConfig, PasswordHasher, RepositoryAuthenticator,
};
pub use validation::CredentialValidator;
pub use verification::{
    MockPhoneVerifier, PhoneVerificationConfig, PhoneVerificationService, PhoneVerifier,
};
