//! Concurrent in-memory store of verification entries.
//!
//! The store owns every entry exclusively; all access goes through the
//! atomic operations below. Keys are normalized email addresses. State is
//! process-local and intentionally volatile: a restart invalidates all
//! pending codes.

use chrono::Duration;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::entities::verification_entry::VerificationEntry;
use crate::errors::DomainError;

/// Keyed store of pending/consumed verification attempts.
///
/// Per-email read-modify-write sequences run under the map's per-key lock,
/// so two concurrent sends cannot both pass the cooldown check and two
/// concurrent verifies cannot both consume one code. Cross-email operations
/// never contend on a shared lock.
#[derive(Default)]
pub struct VerificationStore {
    entries: DashMap<String, VerificationEntry>,
}

impl VerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically apply the send transition for `email`.
    ///
    /// Holds the key lock while checking the resend cooldown and, if it has
    /// elapsed (or no entry exists), replaces the slot with a fresh entry
    /// produced by `make_entry`. Returns `Ok(false)` when the previous send
    /// is still cooling down, leaving the stored entry untouched.
    pub fn replace_after_cooldown<F>(
        &self,
        email: &str,
        cooldown: Duration,
        make_entry: F,
    ) -> Result<bool, DomainError>
    where
        F: FnOnce() -> Result<VerificationEntry, DomainError>,
    {
        match self.entries.entry(email.to_string()) {
            Entry::Occupied(mut slot) => {
                if slot.get().in_cooldown(cooldown) {
                    return Ok(false);
                }
                slot.insert(make_entry()?);
                Ok(true)
            }
            Entry::Vacant(slot) => {
                slot.insert(make_entry()?);
                Ok(true)
            }
        }
    }

    /// Atomically apply the verify transition for `email`.
    ///
    /// Returns `false` when no entry exists, the entry is spent or expired,
    /// or `matches` rejects the candidate. On a match the entry is replaced
    /// with an identical copy marked verified, so a second attempt against
    /// the same code fails as "spent" rather than "absent". The key lock is
    /// held across the whole read-compare-write, which also keeps cleanup
    /// from evicting the entry mid-verification.
    pub fn consume<F>(&self, email: &str, matches: F) -> bool
    where
        F: FnOnce(&VerificationEntry) -> bool,
    {
        let Some(mut slot) = self.entries.get_mut(email) else {
            return false;
        };
        if !slot.is_usable() || !matches(slot.value()) {
            return false;
        }
        let spent = slot.value().clone().into_verified();
        *slot = spent;
        true
    }

    /// Drop every expired entry, verified or not. Returns the eviction
    /// count.
    pub fn remove_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before.saturating_sub(self.entries.len())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the entry for `email`, if any (test helper)
    pub fn peek(&self, email: &str) -> Option<VerificationEntry> {
        self.entries.get(email).map(|e| e.value().clone())
    }
}
