//! Application state and factory
//!
//! This module assembles the actix-web application from the shared service
//! state; `main` and the integration tests both build the app through
//! `create_app`.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use gs_core::repositories::{HistoryRepository, MemberRepository, QuoteRepository};
use gs_core::services::token::TokenService;
use gs_core::services::traits::{MailSenderTrait, PasswordHasherTrait};
use gs_core::services::{
    DashboardService, EmailVerificationService, HistoryService, MemberService,
};

use crate::middleware::cors::create_cors;
use crate::routes::{auth, history, quotes};

/// Shared services handed to every request handler
pub struct AppState<R, Q, L, M, H>
where
    R: MemberRepository,
    Q: QuoteRepository,
    L: HistoryRepository,
    M: MailSenderTrait,
    H: PasswordHasherTrait,
{
    pub verification: Arc<EmailVerificationService<M, H>>,
    pub members: Arc<MemberService<R, H, M>>,
    pub dashboard: Arc<DashboardService<Q>>,
    pub history: Arc<HistoryService<L>>,
}

/// Create and configure the application with all routes and middleware
pub fn create_app<R, Q, L, M, H>(
    state: web::Data<AppState<R, Q, L, M, H>>,
    tokens: web::Data<TokenService>,
    cors_origin: &str,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: MemberRepository + 'static,
    Q: QuoteRepository + 'static,
    L: HistoryRepository + 'static,
    M: MailSenderTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    let cors = create_cors(cors_origin);

    App::new()
        .app_data(state)
        .app_data(tokens)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .service(
                            web::scope("/email")
                                .route(
                                    "/send",
                                    web::post().to(auth::email::send_code::<R, Q, L, M, H>),
                                )
                                .route(
                                    "/verify",
                                    web::post().to(auth::email::verify_code::<R, Q, L, M, H>),
                                ),
                        )
                        .route("/join", web::post().to(auth::member::join::<R, Q, L, M, H>))
                        .route(
                            "/login",
                            web::post().to(auth::member::login::<R, Q, L, M, H>),
                        )
                        .route("/logout", web::post().to(auth::member::logout))
                        .route("/me", web::get().to(auth::member::me))
                        .route(
                            "/check-id",
                            web::get().to(auth::member::check_id::<R, Q, L, M, H>),
                        )
                        .route(
                            "/check-email",
                            web::get().to(auth::member::check_email::<R, Q, L, M, H>),
                        )
                        .route(
                            "/forgotPassword",
                            web::post().to(auth::password::forgot_password::<R, Q, L, M, H>),
                        )
                        .route(
                            "/updatePassword",
                            web::post().to(auth::password::update_password::<R, Q, L, M, H>),
                        )
                        .route(
                            "/deleteAccount",
                            web::post().to(auth::password::delete_account::<R, Q, L, M, H>),
                        ),
                )
                .service(
                    web::scope("/simulation")
                        .route("/quotes", web::get().to(quotes::quotes::<R, Q, L, M, H>)),
                )
                .service(
                    web::scope("/history")
                        .route("", web::get().to(history::list::<R, Q, L, M, H>))
                        .route("/stats", web::get().to(history::stats::<R, Q, L, M, H>))
                        .route("/summary", web::get().to(history::summary::<R, Q, L, M, H>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "goldsim-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
