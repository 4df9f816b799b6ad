//! Outbound mail (SMTP) configuration

/// SMTP relay settings for the mail sender
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP username
    pub smtp_user: String,

    /// SMTP password
    pub smtp_pass: String,

    /// From address on outbound messages
    pub from_address: String,

    /// When true, mail is logged instead of sent (local development)
    pub use_mock: bool,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("smtp.gmail.com"),
            smtp_user: String::new(),
            smtp_pass: String::new(),
            from_address: String::from("noreply@goldsim.app"),
            use_mock: true,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    ///
    /// Falls back to the mock sender when SMTP credentials are absent so the
    /// server can start without a mail account.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let smtp_user = std::env::var("SMTP_USER").unwrap_or_default();
        let smtp_pass = std::env::var("SMTP_PASS").unwrap_or_default();
        let use_mock = std::env::var("MAIL_USE_MOCK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| smtp_user.is_empty() || smtp_pass.is_empty());

        Self {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            from_address: std::env::var("MAIL_FROM").unwrap_or_else(|_| {
                if smtp_user.is_empty() {
                    defaults.from_address
                } else {
                    smtp_user.clone()
                }
            }),
            smtp_user,
            smtp_pass,
            use_mock,
        }
    }
}
