//! Configuration types for the GoldSim server
//!
//! All configuration is environment-driven: each struct has sensible
//! defaults for local development and a `from_env` constructor used by the
//! api binary at startup.

mod database;
mod jwt;
mod mail;
mod server;
mod verification;

pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use mail::MailConfig;
pub use server::ServerConfig;
pub use verification::VerificationConfig;

/// Aggregated application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub mail: MailConfig,
    pub jwt: JwtConfig,
    pub verification: VerificationConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            mail: MailConfig::from_env(),
            jwt: JwtConfig::from_env(),
            verification: VerificationConfig::from_env(),
        }
    }
}
