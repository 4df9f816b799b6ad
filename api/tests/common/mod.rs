//! Shared fixtures for api integration tests.

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use gs_api::AppState;
use gs_core::repositories::history::MockHistoryRepository;
use gs_core::repositories::member::MockMemberRepository;
use gs_core::repositories::quote::MockQuoteRepository;
use gs_core::services::token::TokenService;
use gs_core::services::traits::MailSenderTrait;
use gs_core::services::{
    DashboardService, EmailVerificationService, HistoryService, MemberService,
};
use gs_infra::security::BcryptHasher;
use gs_shared::config::{JwtConfig, VerificationConfig};

pub const CORS_ORIGIN: &str = "http://localhost:5173";

/// Mail sender that records every dispatch instead of relaying
#[derive(Default)]
pub struct CapturingMailSender {
    pub sent: Mutex<Vec<(String, String, String)>>,
}

impl CapturingMailSender {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// 6-digit code embedded in the most recent mail body
    pub fn last_code(&self) -> Option<String> {
        self.sent.lock().unwrap().last().and_then(|(_, _, body)| {
            body.split_whitespace()
                .find(|token| token.len() == 6 && token.chars().all(|c| c.is_ascii_digit()))
                .map(str::to_string)
        })
    }
}

#[async_trait]
impl MailSenderTrait for CapturingMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}

pub type TestState = AppState<
    MockMemberRepository,
    MockQuoteRepository,
    MockHistoryRepository,
    CapturingMailSender,
    BcryptHasher,
>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub tokens: web::Data<TokenService>,
    pub mailer: Arc<CapturingMailSender>,
    pub quote_repo: Arc<MockQuoteRepository>,
    pub history_repo: Arc<MockHistoryRepository>,
}

/// Build an app state wired entirely against in-memory collaborators.
///
/// Bcrypt runs at minimum cost so the suite stays fast.
pub fn test_context() -> TestContext {
    let member_repo = Arc::new(MockMemberRepository::new());
    let quote_repo = Arc::new(MockQuoteRepository::new());
    let history_repo = Arc::new(MockHistoryRepository::new());
    let mailer = Arc::new(CapturingMailSender::default());
    let hasher = Arc::new(BcryptHasher::with_cost(4));

    let verification = Arc::new(EmailVerificationService::new(
        Arc::clone(&mailer),
        Arc::clone(&hasher),
        VerificationConfig::default(),
    ));
    let members = Arc::new(MemberService::new(
        member_repo,
        Arc::clone(&hasher),
        Arc::clone(&mailer),
    ));
    let dashboard = Arc::new(DashboardService::new(Arc::clone(&quote_repo)));
    let history = Arc::new(HistoryService::new(Arc::clone(&history_repo)));

    let state = web::Data::new(AppState {
        verification,
        members,
        dashboard,
        history,
    });
    let tokens = web::Data::new(TokenService::new(JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_minutes: 60,
        issuer: "goldsim-api".to_string(),
    }));

    TestContext {
        state,
        tokens,
        mailer,
        quote_repo,
        history_repo,
    }
}
