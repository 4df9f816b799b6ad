use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use gs_api::{create_app, AppState};
use gs_core::services::token::TokenService;
use gs_core::services::{
    DashboardService, EmailVerificationService, HistoryService, MemberService,
};
use gs_infra::database::mysql::{
    MySqlHistoryRepository, MySqlMemberRepository, MySqlQuoteRepository,
};
use gs_infra::database::create_pool;
use gs_infra::mail::MailSender;
use gs_infra::security::BcryptHasher;
use gs_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting GoldSim API server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    let pool = create_pool(&config.database)
        .await
        .expect("database pool must be available at startup");

    // Repositories
    let member_repo = Arc::new(MySqlMemberRepository::new(pool.clone()));
    let quote_repo = Arc::new(MySqlQuoteRepository::new(pool.clone()));
    let history_repo = Arc::new(MySqlHistoryRepository::new(pool));

    // Collaborators shared by the account and verification services
    let hasher = Arc::new(BcryptHasher::new());
    let mailer = Arc::new(MailSender::from_config(&config.mail).expect("mail sender setup failed"));

    // Services
    let verification = Arc::new(EmailVerificationService::new(
        Arc::clone(&mailer),
        Arc::clone(&hasher),
        config.verification.clone(),
    ));
    let members = Arc::new(MemberService::new(
        member_repo,
        Arc::clone(&hasher),
        Arc::clone(&mailer),
    ));
    let dashboard = Arc::new(DashboardService::new(quote_repo));
    let history = Arc::new(HistoryService::new(history_repo));

    // Periodic sweep of expired verification entries
    Arc::clone(&verification).start_background_task();

    let state = web::Data::new(AppState {
        verification,
        members,
        dashboard,
        history,
    });
    let tokens = web::Data::new(TokenService::new(config.jwt.clone()));
    let cors_origin = config.server.cors_origin.clone();

    info!("Server will bind to: {bind_address}");

    HttpServer::new(move || create_app(state.clone(), tokens.clone(), &cors_origin))
        .bind(&bind_address)?
        .run()
        .await
}
