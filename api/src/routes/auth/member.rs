//! Registration, login and account lookup endpoints.

use actix_web::{web, HttpResponse};
use validator::Validate;

use gs_core::repositories::{HistoryRepository, MemberRepository, QuoteRepository};
use gs_core::services::member::JoinRequest;
use gs_core::services::token::TokenService;
use gs_core::services::traits::{MailSenderTrait, PasswordHasherTrait};

use crate::app::AppState;
use crate::auth::AuthenticatedMember;
use crate::dto::auth::{
    CheckEmailQuery, CheckIdQuery, ExistsResponse, LoginRequest, LoginResponse, MeResponse,
    SignupRequest, SignupResponse,
};
use crate::error::{domain_error_response, ErrorBody};

/// Handler for POST /api/auth/join
pub async fn join<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        log::warn!("signup validation failed: {errors}");
        return HttpResponse::BadRequest().json(ErrorBody {
            ok: false,
            message: "invalid signup data".to_string(),
        });
    }

    let join_request = JoinRequest {
        member_id: request.0.member_id,
        password: request.0.member_pwd,
        member_name: request.0.member_name,
        member_email: request.0.member_email,
    };

    match state.members.join(join_request, None).await {
        Ok(profile) => HttpResponse::Ok().json(SignupResponse::from(profile)),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for POST /api/auth/login
///
/// Successful login answers the member profile plus a bearer token for the
/// authenticated endpoints.
pub async fn login<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    tokens: web::Data<TokenService>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    let profile = match state
        .members
        .login(&request.member_id, &request.member_pwd)
        .await
    {
        Ok(profile) => profile,
        Err(err) => return domain_error_response(&err),
    };

    let issued = match tokens.issue(&profile) {
        Ok(issued) => issued,
        Err(err) => return domain_error_response(&err),
    };

    HttpResponse::Ok().json(LoginResponse {
        member_no: profile.member_no,
        member_id: profile.member_id,
        member_name: profile.member_name,
        member_email: profile.member_email,
        member_role: profile.member_role,
        access_token: issued.token,
        expires_in: issued.expires_in,
    })
}

/// Handler for POST /api/auth/logout
///
/// Tokens are stateless; logout is the client discarding its copy.
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Handler for GET /api/auth/me
pub async fn me(member: AuthenticatedMember) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        member_id: member.0.sub,
        member_no: member.0.member_no,
    })
}

/// Handler for GET /api/auth/check-id
pub async fn check_id<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    query: web::Query<CheckIdQuery>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    match state.members.check_id(&query.member_id).await {
        Ok(exists) => HttpResponse::Ok().json(ExistsResponse { exists }),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/auth/check-email
pub async fn check_email<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    query: web::Query<CheckEmailQuery>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    match state.members.check_email(&query.member_email).await {
        Ok(exists) => HttpResponse::Ok().json(ExistsResponse { exists }),
        Err(err) => domain_error_response(&err),
    }
}
