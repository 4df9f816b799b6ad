//! Email verification code configuration

/// Timing parameters for the verification code store
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Seconds before a code expires
    pub code_ttl_seconds: i64,

    /// Minimum seconds between two code sends to the same email
    pub resend_cooldown_seconds: i64,

    /// How often the expired-entry sweep runs, in seconds
    pub cleanup_interval_seconds: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: 180,
            resend_cooldown_seconds: 10,
            cleanup_interval_seconds: 300,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_seconds: std::env::var("VERIFICATION_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_ttl_seconds),
            resend_cooldown_seconds: std::env::var("VERIFICATION_COOLDOWN_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.resend_cooldown_seconds),
            cleanup_interval_seconds: std::env::var("VERIFICATION_CLEANUP_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cleanup_interval_seconds),
        }
    }
}
