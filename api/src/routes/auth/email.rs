//! Email verification code endpoints.
//!
//! `POST /api/auth/email/send` answers `{"ok": true}` whether a code went
//! out, the address was empty, or the cooldown swallowed the request; the
//! response does not reveal which. Only a mail transport failure surfaces,
//! as a generic 500.
//!
//! `POST /api/auth/email/verify` answers 200 `{"ok": true}` on success and
//! 400 `{"ok": false}` for every failure mode alike.

use actix_web::{web, HttpResponse};

use gs_core::repositories::{HistoryRepository, MemberRepository, QuoteRepository};
use gs_core::services::traits::{MailSenderTrait, PasswordHasherTrait};

use crate::app::AppState;
use crate::dto::auth::{OkResponse, SendEmailCodeRequest, VerifyEmailCodeRequest};
use crate::error::domain_error_response;

/// Handler for POST /api/auth/email/send
pub async fn send_code<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    request: web::Json<SendEmailCodeRequest>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    match state.verification.send_code(&request.member_email).await {
        Ok(()) => HttpResponse::Ok().json(OkResponse::ok()),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/auth/email/verify
pub async fn verify_code<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    request: web::Json<VerifyEmailCodeRequest>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    if state
        .verification
        .verify_code(&request.member_email, &request.code)
    {
        HttpResponse::Ok().json(OkResponse::ok())
    } else {
        HttpResponse::BadRequest().json(OkResponse::failed())
    }
}
