//! Error types for the domain layer

mod domain_error;

pub use domain_error::{AuthError, DomainError};

/// Result alias used throughout the domain layer
pub type DomainResult<T> = Result<T, DomainError>;
