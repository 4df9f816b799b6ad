//! Shared utilities and common types for the GoldSim server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination types for list endpoints
//! - Utility functions (email normalization, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, JwtConfig, MailConfig, ServerConfig, VerificationConfig,
};
pub use types::{PageRequest, PagedResponse};
pub use utils::email;
