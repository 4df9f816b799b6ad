//! Domain-specific error types
//!
//! The taxonomy is deliberately small: account-facing failures collapse into
//! a handful of indistinct variants so the HTTP layer never leaks which
//! check rejected a request.

use thiserror::Error;

/// Account and credential errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Member id already in use")]
    DuplicateId,

    #[error("Email already in use")]
    DuplicateEmail,

    /// Unknown member and wrong password are intentionally the same error.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Forgot-password: the (id, email) pair did not match a member.
    #[error("Member id or email mismatch")]
    AccountMismatch,

    #[error("Current password does not match")]
    PasswordMismatch,

    #[error("New password must differ from the current password")]
    PasswordReused,

    /// A guarded update affected zero rows: the record changed underneath us.
    #[error("Record was modified concurrently, retry")]
    Conflict,

    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Top-level error type for the domain layer
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Mail dispatch failed: {message}")]
    Mail { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for an internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_converts_into_domain_error() {
        let err: DomainError = AuthError::DuplicateId.into();
        assert!(matches!(err, DomainError::Auth(AuthError::DuplicateId)));
    }

    #[test]
    fn credential_failures_are_indistinct() {
        // One variant for both unknown member and wrong password.
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }
}
