//! Configuration modules for the Anteroom backend.

pub mod database;
pub mod environment;
pub mod mail;
pub mod verify;

pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use mail::MailConfig;
pub use verify::VerifyConfig;

/// Aggregated application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Outbound mail API settings
    pub mail: MailConfig,
    /// Phone verification provider settings
    pub verify: VerifyConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Build the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            database: DatabaseConfig::from_env(),
            mail: MailConfig::from_env(),
            verify: VerifyConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }
}
