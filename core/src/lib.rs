//! # Anteroom Core
//!
//! Core business logic and domain layer for the Anteroom backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export the types almost every consumer touches
pub use domain::entities::account::Account;
pub use errors::{DomainError, DomainResult};
pub use repositories::AccountRepository;
