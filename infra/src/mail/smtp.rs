//! SMTP mail sender backed by lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::debug;

use gs_core::services::traits::MailSenderTrait;
use gs_shared::config::MailConfig;

use crate::InfrastructureError;

/// Mail sender relaying through an authenticated SMTP host
pub struct SmtpMailSender {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailSender {
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let creds = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());
        let transport = SmtpTransport::relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Mail(e.to_string()))?
            .credentials(creds)
            .build();

        let from = format!("GoldSim <{}>", config.from_address)
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("invalid from address: {e}")))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl MailSenderTrait for SmtpMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to
                .parse::<Mailbox>()
                .map_err(|e| format!("invalid recipient: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| format!("message build failed: {e}"))?;

        self.transport
            .send(&message)
            .map_err(|e| format!("smtp send failed: {e}"))?;

        debug!(to, "mail relayed");
        Ok(())
    }
}
