//! Mapping from domain errors to HTTP responses.

use actix_web::HttpResponse;
use serde::Serialize;

use gs_core::errors::{AuthError, DomainError};

/// Error body shared by all failing endpoints
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub message: String,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Translate a domain error into an HTTP response.
///
/// Mail and internal failures get a generic body; their details stay in the
/// server log.
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Auth(auth) => auth_error_response(auth),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorBody::new(message.clone()))
        }
        DomainError::Mail { message } => {
            log::error!("mail dispatch failed: {message}");
            HttpResponse::InternalServerError().json(ErrorBody::new("server error"))
        }
        DomainError::Internal { message } => {
            log::error!("internal error: {message}");
            HttpResponse::InternalServerError().json(ErrorBody::new("server error"))
        }
    }
}

fn auth_error_response(err: &AuthError) -> HttpResponse {
    match err {
        AuthError::InvalidCredentials | AuthError::InvalidToken => {
            HttpResponse::Unauthorized().json(ErrorBody::new(err.to_string()))
        }
        AuthError::Conflict => HttpResponse::Conflict().json(ErrorBody::new(err.to_string())),
        AuthError::DuplicateId
        | AuthError::DuplicateEmail
        | AuthError::AccountMismatch
        | AuthError::PasswordMismatch
        | AuthError::PasswordReused => {
            HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()))
        }
    }
}
