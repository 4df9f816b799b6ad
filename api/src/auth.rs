//! Bearer token extraction for authenticated endpoints.

use std::future::{ready, Ready};

use actix_web::error::InternalError;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest, HttpResponse};

use gs_core::services::token::{AccessClaims, TokenService};

use crate::error::ErrorBody;

/// Claims of the authenticated caller.
///
/// Extracting this from a request validates the `Authorization: Bearer`
/// header against the token service; handlers that take it are
/// login-protected and get the member identity for free.
pub struct AuthenticatedMember(pub AccessClaims);

impl FromRequest for AuthenticatedMember {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_claims(req).map(AuthenticatedMember))
    }
}

fn extract_claims(req: &HttpRequest) -> Result<AccessClaims, actix_web::Error> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| unauthorized("authentication unavailable"))?;

    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| unauthorized("login required"))?;

    tokens
        .verify(token)
        .map_err(|_| unauthorized("invalid or expired token"))
}

fn unauthorized(message: &str) -> actix_web::Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::Unauthorized().json(ErrorBody {
            ok: false,
            message: message.to_string(),
        }),
    )
    .into()
}
