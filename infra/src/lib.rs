//! # Infrastructure Layer
//!
//! Concrete implementations of the Anteroom core's outbound interfaces:
//! - **Database**: MySQL account repository using SQLx
//! - **Verify**: Twilio Verify client for phone one-time codes
//! - **Mail**: HTTP mail API client for activation emails
//! - **Password**: bcrypt implementation of the password hasher

use thiserror::Error;

pub mod database;
pub mod mail;
pub mod password;
pub mod verify;

/// Errors raised while constructing or operating infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Verification provider error: {0}")]
    Verify(String),

    #[error("Mail transport error: {0}")]
    Mail(String),
}
