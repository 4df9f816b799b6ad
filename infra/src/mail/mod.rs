//! Outbound mail senders
//!
//! SMTP in production, a logging sender for local development when no SMTP
//! credentials are configured.

mod mock_mail;
mod smtp;

pub use mock_mail::LogMailSender;
pub use smtp::SmtpMailSender;

use async_trait::async_trait;

use gs_core::services::traits::MailSenderTrait;
use gs_shared::config::MailConfig;

use crate::InfrastructureError;

/// Runtime-selected mail sender
pub enum MailSender {
    Smtp(SmtpMailSender),
    Log(LogMailSender),
}

impl MailSender {
    /// Pick a sender from configuration: SMTP when credentials are present,
    /// the logging sender otherwise.
    pub fn from_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if config.use_mock {
            Ok(Self::Log(LogMailSender::new()))
        } else {
            Ok(Self::Smtp(SmtpMailSender::new(config)?))
        }
    }
}

#[async_trait]
impl MailSenderTrait for MailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        match self {
            Self::Smtp(sender) => sender.send(to, subject, body).await,
            Self::Log(sender) => sender.send(to, subject, body).await,
        }
    }
}
