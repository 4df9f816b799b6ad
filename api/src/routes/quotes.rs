//! Dashboard quote endpoint.

use actix_web::{web, HttpResponse};

use gs_core::repositories::{HistoryRepository, MemberRepository, QuoteRepository};
use gs_core::services::traits::{MailSenderTrait, PasswordHasherTrait};

use crate::app::AppState;
use crate::dto::quotes::QuotesQuery;
use crate::error::domain_error_response;

/// Handler for GET /api/simulation/quotes
///
/// Examples:
/// `GET /api/simulation/quotes?to=2024-10-01&unit=1y`
/// `GET /api/simulation/quotes?from=2024-06-01&to=2024-10-01`
pub async fn quotes<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    query: web::Query<QuotesQuery>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    match state
        .dashboard
        .quotes(query.to, &query.unit, query.from)
        .await
    {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => domain_error_response(&err),
    }
}
