//! Simulation history endpoints (authenticated).

use actix_web::{web, HttpResponse};

use gs_core::repositories::history::{HistoryFilter, HistorySort};
use gs_core::repositories::{HistoryRepository, MemberRepository, QuoteRepository};
use gs_core::services::traits::{MailSenderTrait, PasswordHasherTrait};
use gs_shared::types::PageRequest;

use crate::app::AppState;
use crate::auth::AuthenticatedMember;
use crate::dto::history::{HistoryQuery, StatsQuery};
use crate::error::domain_error_response;

fn type_filter(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Handler for GET /api/history
pub async fn list<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    member: AuthenticatedMember,
    query: web::Query<HistoryQuery>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    let filter = HistoryFilter {
        member_no: member.0.member_no,
        from: query.from,
        to: query.to,
        history_type: type_filter(&query.history_type),
    };
    let sort = HistorySort::parse(&query.sort);
    let page = PageRequest::new(query.page, query.size);

    match state.history.list(&filter, sort, page).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/history/stats
pub async fn stats<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    member: AuthenticatedMember,
    query: web::Query<StatsQuery>,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    let filter = HistoryFilter {
        member_no: member.0.member_no,
        from: query.from,
        to: query.to,
        history_type: type_filter(&query.history_type),
    };

    match state.history.stats(&filter).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => domain_error_response(&err),
    }
}

/// Handler for GET /api/history/summary
pub async fn summary<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    member: AuthenticatedMember,
) -> HttpResponse
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    match state.history.summary(member.0.member_no).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => domain_error_response(&err),
    }
}
