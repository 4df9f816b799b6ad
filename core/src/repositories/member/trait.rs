//! Member repository trait defining the interface for member persistence.

use async_trait::async_trait;

use crate::domain::entities::member::Member;
use crate::errors::DomainError;

/// Repository contract for `Member` rows.
///
/// Password-guarded mutations (`update_password`, `delete`) bind the caller's
/// view of the current hash in the WHERE clause and report affected rows, so
/// a concurrent change surfaces as zero rows instead of a lost update.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a new member and return it with the generated `member_no`
    async fn insert(&self, member: Member) -> Result<Member, DomainError>;

    /// Find a member by login id
    async fn find_by_member_id(&self, member_id: &str) -> Result<Option<Member>, DomainError>;

    /// Number of members with this login id (0 or 1)
    async fn count_by_member_id(&self, member_id: &str) -> Result<i64, DomainError>;

    /// Number of members with this email
    async fn count_by_email(&self, member_email: &str) -> Result<i64, DomainError>;

    /// Stamp the most recent successful login
    async fn update_last_login(&self, member_id: &str) -> Result<(), DomainError>;

    /// Current password hash for a member, if the member exists
    async fn select_password_hash(&self, member_id: &str) -> Result<Option<String>, DomainError>;

    /// Replace the password hash, guarded by the expected current hash.
    ///
    /// Returns the number of affected rows (0 when the member is gone or the
    /// hash changed concurrently).
    async fn update_password(
        &self,
        member_id: &str,
        old_hash: &str,
        new_hash: &str,
    ) -> Result<u64, DomainError>;

    /// Overwrite the password hash for the member matching both id and
    /// email. Returns affected rows (0 on mismatch).
    async fn reset_password(
        &self,
        member_id: &str,
        member_email: &str,
        new_hash: &str,
    ) -> Result<u64, DomainError>;

    /// Delete the member, guarded by the current password hash.
    /// Returns affected rows.
    async fn delete(&self, member_id: &str, pwd_hash: &str) -> Result<u64, DomainError>;
}
