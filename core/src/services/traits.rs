//! Collaborator seams shared by the account and verification services

use async_trait::async_trait;

/// Trait for outbound mail integration
#[async_trait]
pub trait MailSenderTrait: Send + Sync {
    /// Send a single-recipient plaintext message
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}

/// Trait for one-way password/secret hashing
///
/// `encode` must salt, so two calls on equal input produce different output;
/// `matches` must compare in constant time.
pub trait PasswordHasherTrait: Send + Sync {
    /// Hash a plaintext secret
    fn encode(&self, plaintext: &str) -> Result<String, String>;

    /// Check a plaintext secret against an encoded hash
    fn matches(&self, plaintext: &str, hash: &str) -> bool;
}
