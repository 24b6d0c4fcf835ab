//! Authentication service module
//!
//! This module resolves submitted credentials to at most one authenticated
//! account:
//! - Login by phone number or by the configured username-style field
//! - Session lifetime policy (remember-me)
//! - Injected `Authenticator` capability, so resolution carries no
//!   compile-time dependency on a particular storage or hashing scheme

mod authenticator;
mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use authenticator::{Authenticator, RepositoryAuthenticator};
pub use config::IdentifierConfig;
pub use password::PasswordHasher;
pub use service::AuthService;
