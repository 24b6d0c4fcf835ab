//! Phone verification module
//!
//! One-way `Unverified -> Verified` lifecycle for the phone identifier,
//! driven by an external one-time-code provider:
//! - Code requests delegate to the provider, which keeps at most one live
//!   code per phone (issuing invalidates the prior code)
//! - Confirmation checks the submitted code with the provider and records
//!   the proof with a conditional write, so concurrent confirmations for
//!   the same account cannot both win

mod config;
mod mock;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::{PhoneVerificationConfig, CODE_LENGTH};
pub use mock::{MockPhoneVerifier, VerificationAttempt};
pub use service::PhoneVerificationService;
pub use traits::PhoneVerifier;
