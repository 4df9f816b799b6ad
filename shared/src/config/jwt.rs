//! JWT access token configuration

/// Settings for access token issuance and validation
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret (HS256)
    pub secret: String,

    /// Access token lifetime in minutes
    pub access_token_minutes: i64,

    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("dev-secret-change-me"),
            access_token_minutes: 60,
            issuer: String::from("goldsim-api"),
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            access_token_minutes: std::env::var("JWT_ACCESS_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_minutes),
            issuer: defaults.issuer,
        }
    }
}
