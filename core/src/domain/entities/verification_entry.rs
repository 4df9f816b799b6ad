//! Stored record of one outstanding or consumed email verification attempt.

use chrono::{DateTime, Duration, Utc};

/// One verification attempt, keyed by normalized email in the store.
///
/// Entries are replaced wholesale on every state change, never partially
/// mutated: a send writes a fresh entry, a successful verify replaces the
/// entry with a copy whose `verified` flag is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEntry {
    /// Irreversible salted hash of the 6-digit code. The plaintext is never
    /// retained past dispatch.
    pub code_hash: String,

    /// Instant after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,

    /// When the code was dispatched; drives the resend cooldown
    pub last_sent_at: DateTime<Utc>,

    /// Set once the code has been consumed; a spent entry rejects every
    /// further verify until a new send replaces it
    pub verified: bool,
}

impl VerificationEntry {
    /// Create a fresh, unverified entry expiring `ttl_seconds` from now
    pub fn new(code_hash: String, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            code_hash,
            expires_at: now + Duration::seconds(ttl_seconds),
            last_sent_at: now,
            verified: false,
        }
    }

    /// Whether the clock has passed `expires_at`
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Whether a verify attempt may still be evaluated against this entry
    pub fn is_usable(&self) -> bool {
        !self.verified && !self.is_expired()
    }

    /// Whether a new send for the same email must be ignored
    pub fn in_cooldown(&self, cooldown: Duration) -> bool {
        self.last_sent_at + cooldown > Utc::now()
    }

    /// Copy of this entry marked as consumed; hash, expiry and sent time are
    /// retained so a repeat verify fails as "spent" rather than "absent"
    pub fn into_verified(self) -> Self {
        Self {
            verified: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration as StdDuration;

    #[test]
    fn fresh_entry_is_usable() {
        let entry = VerificationEntry::new("hash".to_string(), 180);
        assert!(!entry.verified);
        assert!(!entry.is_expired());
        assert!(entry.is_usable());
    }

    #[test]
    fn zero_ttl_entry_expires() {
        let entry = VerificationEntry::new("hash".to_string(), 0);
        thread::sleep(StdDuration::from_millis(10));
        assert!(entry.is_expired());
        assert!(!entry.is_usable());
    }

    #[test]
    fn verified_entry_is_spent_but_keeps_fields() {
        let entry = VerificationEntry::new("hash".to_string(), 180);
        let expires_at = entry.expires_at;
        let sent_at = entry.last_sent_at;

        let spent = entry.into_verified();
        assert!(spent.verified);
        assert!(!spent.is_usable());
        assert_eq!(spent.expires_at, expires_at);
        assert_eq!(spent.last_sent_at, sent_at);
        assert_eq!(spent.code_hash, "hash");
    }

    #[test]
    fn cooldown_window_tracks_last_sent() {
        let entry = VerificationEntry::new("hash".to_string(), 180);
        assert!(entry.in_cooldown(Duration::seconds(10)));
        assert!(!entry.in_cooldown(Duration::seconds(0)));
    }
}
