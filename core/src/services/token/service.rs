//! HS256 access token issuance and validation.
//!
//! Login hands out a short-lived bearer token; authenticated endpoints
//! validate it and read the member identity from the claims. There is no
//! refresh or revocation machinery: expiry bounds a token's life and logout
//! is a client-side discard.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gs_shared::config::JwtConfig;

use crate::domain::entities::member::MemberProfile;
use crate::errors::{AuthError, DomainError, DomainResult};

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Member login id
    pub sub: String,

    /// Numeric member key
    pub member_no: i64,

    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// A signed token plus its remaining lifetime in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Issues and validates HS256 access tokens
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue an access token for a logged-in member
    pub fn issue(&self, profile: &MemberProfile) -> DomainResult<IssuedToken> {
        let now = Utc::now();
        let expires_in = Duration::minutes(self.config.access_token_minutes);
        let claims = AccessClaims {
            sub: profile.member_id.clone(),
            member_no: profile.member_no,
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("token encoding failed: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_in: expires_in.num_seconds(),
        })
    }

    /// Validate a bearer token and return its claims.
    ///
    /// Every rejection (bad signature, expired, wrong issuer, malformed)
    /// collapses into `InvalidToken`.
    pub fn verify(&self, token: &str) -> DomainResult<AccessClaims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken.into())
    }
}
