//! Password maintenance endpoints.

use actix_web::{web, HttpResponse};

use gs_core::repositories::{HistoryRepository, MemberRepository, QuoteRepository};
use gs_core::services::traits::{MailSenderTrait, PasswordHasherTrait};

use crate::app::AppState;
use crate::auth::AuthenticatedMember;
use crate::dto::auth::{
    DeleteAccountRequest, ForgotPasswordRequest, OkResponse, UpdatePasswordRequest,
};
use crate::error::{domain_error_response, ErrorBody};

/// Handler for POST /api/auth/forgotPassword
///
/// Unauthenticated: resets the password for a matching (id, email) pair and
/// mails a temporary one.
pub async fn forgot_password<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    match state
        .members
        .forgot_password(&request.member_id, &request.member_email)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(OkResponse::ok()),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/auth/updatePassword
pub async fn update_password<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    member: AuthenticatedMember,
    request: web::Json<UpdatePasswordRequest>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    if request.new_pwd != request.confirm_pwd {
        return HttpResponse::BadRequest().json(ErrorBody {
            ok: false,
            message: "new password confirmation does not match".to_string(),
        });
    }

    match state
        .members
        .update_password(&member.0.sub, &request.current_pwd, &request.new_pwd)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(OkResponse::ok()),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/auth/deleteAccount
pub async fn delete_account<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    member: AuthenticatedMember,
    request: web::Json<DeleteAccountRequest>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    match state
        .members
        .delete_account(&member.0.sub, &request.password)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => domain_error_response(&err),
    }
}
