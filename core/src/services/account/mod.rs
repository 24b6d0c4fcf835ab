//! Account service module
//!
//! Registration and profile/identifier update flows, composing the
//! credential validator with the repository and the activation mailer.

mod service;

#[cfg(test)]
mod tests;

pub use service::AccountService;
