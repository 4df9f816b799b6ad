//! # GoldSim Infrastructure
//!
//! Concrete implementations of the core crate's collaborator seams:
//! MySQL-backed repositories, the SMTP mail sender, and the bcrypt hasher.

pub mod database;
pub mod mail;
pub mod security;

use thiserror::Error;

/// Errors raised while constructing infrastructure components
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Mail transport error: {0}")]
    Mail(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
