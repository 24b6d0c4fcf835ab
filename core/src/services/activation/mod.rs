//! Email activation module
//!
//! Email verification rides on signed tokens instead of one-time codes:
//! - `ActivationTokenService` mints and validates tokens binding the
//!   account id to a freshness marker derived from the password hash, so
//!   changing the password invalidates outstanding links
//! - `EmailVerificationService` delivers activation links through the
//!   mail transport and confirms tokens idempotently

mod config;
mod service;
mod token;
mod traits;

#[cfg(test)]
mod tests;

pub use config::ActivationTokenConfig;
pub use service::{EmailVerificationService, ACTIVATION_EMAIL_SUBJECT};
pub use token::{ActivationClaims, ActivationTokenService};
pub use traits::Mailer;
