//! Logging mail sender for local development.

use async_trait::async_trait;
use tracing::info;

use gs_core::services::traits::MailSenderTrait;

/// Mail sender that logs instead of relaying.
///
/// Used when no SMTP credentials are configured so the server (and the
/// verification flow) can run locally; the code appears in the log output.
#[derive(Default)]
pub struct LogMailSender;

impl LogMailSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailSenderTrait for LogMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        info!(to, subject, body, "mock mail (not sent)");
        Ok(())
    }
}
