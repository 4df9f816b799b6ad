//! Email verification service implementation

use std::sync::Arc;

use chrono::Duration;
use rand::{rngs::OsRng, Rng};
use tracing::{debug, error, info};

use gs_shared::config::VerificationConfig;
use gs_shared::utils::email;

use crate::domain::entities::verification_entry::VerificationEntry;
use crate::errors::{DomainError, DomainResult};
use crate::services::traits::{MailSenderTrait, PasswordHasherTrait};

use super::store::VerificationStore;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

const MAIL_SUBJECT: &str = "[GoldSim] Email verification code";

/// Service for issuing and consuming email verification codes.
///
/// Owns the in-memory entry store; collaborators (mail sender, hasher) come
/// in behind traits so tests can observe dispatches and skip real bcrypt.
pub struct EmailVerificationService<M: MailSenderTrait, H: PasswordHasherTrait> {
    store: VerificationStore,
    mailer: Arc<M>,
    hasher: Arc<H>,
    config: VerificationConfig,
}

impl<M: MailSenderTrait, H: PasswordHasherTrait> EmailVerificationService<M, H> {
    pub fn new(mailer: Arc<M>, hasher: Arc<H>, config: VerificationConfig) -> Self {
        Self {
            store: VerificationStore::new(),
            mailer,
            hasher,
            config,
        }
    }

    /// Send a verification code to `raw_email`.
    ///
    /// Empty input and a send inside the resend cooldown are silent no-ops:
    /// the caller cannot tell them apart from a successful dispatch, so the
    /// endpoint does not reveal whether an address is known or throttled.
    /// On a real send the previous entry (if any) is replaced outright, the
    /// plaintext code goes out by mail and only its hash is retained.
    ///
    /// A mail failure propagates after the store write; the stored code is
    /// valid but undelivered and the user can re-request once the cooldown
    /// elapses.
    pub async fn send_code(&self, raw_email: &str) -> DomainResult<()> {
        let email = email::normalize(raw_email);
        if email.is_empty() {
            return Ok(());
        }

        let code = generate_code();
        let replaced = self.store.replace_after_cooldown(
            &email,
            Duration::seconds(self.config.resend_cooldown_seconds),
            || {
                let hash = self
                    .hasher
                    .encode(&code)
                    .map_err(|e| DomainError::internal(format!("code hashing failed: {e}")))?;
                Ok(VerificationEntry::new(hash, self.config.code_ttl_seconds))
            },
        )?;

        if !replaced {
            debug!(
                email = %email::mask(&email),
                "resend cooldown active, ignoring send request"
            );
            return Ok(());
        }

        // Dispatch happens outside the store lock; the write above is not
        // rolled back if it fails.
        let body = format!(
            "Verification code: {} (enter within {} minutes)",
            code,
            self.config.code_ttl_seconds / 60
        );
        self.mailer
            .send(&email, MAIL_SUBJECT, &body)
            .await
            .map_err(|e| {
                error!(email = %email::mask(&email), error = %e, "verification mail dispatch failed");
                DomainError::Mail { message: e }
            })?;

        info!(email = %email::mask(&email), "verification code dispatched");
        Ok(())
    }

    /// Verify a candidate code for `raw_email`.
    ///
    /// Returns `false` uniformly for every failure mode: blank input,
    /// unknown email, spent or expired entry, mismatched code. A match
    /// consumes the entry, so exactly one verify can succeed per send.
    pub fn verify_code(&self, raw_email: &str, code: &str) -> bool {
        let email = email::normalize(raw_email);
        if email.is_empty() || code.trim().is_empty() {
            return false;
        }

        let ok = self
            .store
            .consume(&email, |entry| self.hasher.matches(code, &entry.code_hash));
        if ok {
            info!(email = %email::mask(&email), "email verified");
        }
        ok
    }

    /// Evict every expired entry. Returns the eviction count.
    pub fn cleanup(&self) -> usize {
        self.store.remove_expired()
    }

    /// Spawn the periodic cleanup task.
    ///
    /// Runs independently of request traffic at the configured interval for
    /// the life of the process.
    pub fn start_background_task(self: Arc<Self>)
    where
        M: 'static,
        H: 'static,
    {
        let interval = std::time::Duration::from_secs(self.config.cleanup_interval_seconds);

        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.cleanup_interval_seconds,
                "verification cleanup task started"
            );

            let mut timer = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so a sweep never
            // races server startup.
            timer.tick().await;

            loop {
                timer.tick().await;
                let evicted = self.cleanup();
                if evicted > 0 {
                    info!(evicted, "evicted expired verification entries");
                } else {
                    debug!("verification cleanup pass found nothing to evict");
                }
            }
        });
    }

    /// Store handle for assertions in tests
    #[cfg(test)]
    pub(crate) fn store(&self) -> &VerificationStore {
        &self.store
    }
}

/// Generate a 6-digit code from the OS CSPRNG, zero-padded to `000000`
fn generate_code() -> String {
    let code: u32 = OsRng.gen_range(0..1_000_000);
    format!("{:0width$}", code, width = CODE_LENGTH)
}
