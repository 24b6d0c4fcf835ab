//! Repository interfaces for durable persistence.

pub mod account;

pub use account::{AccountRepository, MockAccountRepository};
