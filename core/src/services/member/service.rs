//! Member account operations: registration, login, password maintenance.

use std::sync::Arc;

use rand::{rngs::OsRng, Rng};
use tracing::{info, warn};

use gs_shared::utils::email;

use crate::domain::entities::member::{Member, MemberProfile};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::member::MemberRepository;
use crate::services::traits::{MailSenderTrait, PasswordHasherTrait};

/// Characters used for generated temporary passwords. Ambiguous glyphs
/// (I, l, O, 0, 1) are excluded.
const TEMP_PASSWORD_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#$%^&*?";

/// Length of generated temporary passwords
const TEMP_PASSWORD_LEN: usize = 12;

/// Default role assigned at registration
pub const DEFAULT_ROLE: &str = "ROLE_USER";

/// Registration input
#[derive(Debug, Clone)]
pub struct JoinRequest {
    pub member_id: String,
    pub password: String,
    pub member_name: String,
    pub member_email: String,
}

/// Account service for member registration and maintenance
pub struct MemberService<R, H, M>
where
    R: MemberRepository,
    H: PasswordHasherTrait,
    M: MailSenderTrait,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    mailer: Arc<M>,
}

impl<R, H, M> MemberService<R, H, M>
where
    R: MemberRepository,
    H: PasswordHasherTrait,
    M: MailSenderTrait,
{
    pub fn new(repository: Arc<R>, hasher: Arc<H>, mailer: Arc<M>) -> Self {
        Self {
            repository,
            hasher,
            mailer,
        }
    }

    /// Register a new member.
    ///
    /// The password is bcrypt-hashed before it reaches the repository;
    /// duplicate id/email are rejected first.
    pub async fn join(&self, req: JoinRequest, role: Option<&str>) -> DomainResult<MemberProfile> {
        if req.member_id.trim().is_empty()
            || req.password.trim().is_empty()
            || req.member_name.trim().is_empty()
        {
            return Err(DomainError::validation("missing required field"));
        }
        if !email::is_valid(req.member_email.trim()) {
            return Err(DomainError::validation("invalid email format"));
        }

        if self.repository.count_by_member_id(&req.member_id).await? > 0 {
            return Err(AuthError::DuplicateId.into());
        }
        if self.repository.count_by_email(&req.member_email).await? > 0 {
            return Err(AuthError::DuplicateEmail.into());
        }

        let hash = self
            .hasher
            .encode(&req.password)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))?;

        let member = Member {
            member_no: 0,
            member_id: req.member_id,
            member_pwd: hash,
            member_name: req.member_name,
            member_email: req.member_email,
            member_role: role.unwrap_or(DEFAULT_ROLE).to_string(),
            created_at: None,
            updated_at: None,
            last_login_at: None,
            is_active: true,
        };

        let created = self.repository.insert(member).await?;
        info!(member_id = %created.member_id, "member registered");
        Ok(created.profile())
    }

    /// Authenticate a member by id and password.
    ///
    /// Unknown member and wrong password return the same error so the
    /// endpoint cannot be used to probe for registered ids.
    pub async fn login(&self, member_id: &str, password: &str) -> DomainResult<MemberProfile> {
        let member = self
            .repository
            .find_by_member_id(member_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.matches(password, &member.member_pwd) {
            warn!(member_id, "login failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.repository.update_last_login(member_id).await?;
        Ok(member.profile())
    }

    /// Whether a login id is taken. Blank input reports taken, which keeps
    /// the signup form from treating it as available.
    pub async fn check_id(&self, member_id: &str) -> DomainResult<bool> {
        let member_id = member_id.trim();
        if member_id.is_empty() {
            return Ok(true);
        }
        Ok(self.repository.count_by_member_id(member_id).await? > 0)
    }

    /// Whether an email is taken. Blank input reports taken.
    pub async fn check_email(&self, member_email: &str) -> DomainResult<bool> {
        let member_email = member_email.trim();
        if member_email.is_empty() {
            return Ok(true);
        }
        Ok(self.repository.count_by_email(member_email).await? > 0)
    }

    /// Reset a forgotten password.
    ///
    /// Generates a temporary password, overwrites the stored hash for the
    /// member matching both id and email, then mails the plaintext to the
    /// member. A non-matching pair fails before anything is written.
    pub async fn forgot_password(&self, member_id: &str, member_email: &str) -> DomainResult<()> {
        if member_id.trim().is_empty() || member_email.trim().is_empty() {
            return Err(AuthError::AccountMismatch.into());
        }
        let member_id = member_id.trim();
        let member_email = email::normalize(member_email);

        let temp_password = generate_temp_password();
        let hash = self
            .hasher
            .encode(&temp_password)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))?;

        let rows = self
            .repository
            .reset_password(member_id, &member_email, &hash)
            .await?;
        if rows == 0 {
            return Err(AuthError::AccountMismatch.into());
        }

        let body = format!(
            "Temporary password: {temp_password}\nPlease change your password right after logging in."
        );
        self.mailer
            .send(&member_email, "[GoldSim] Temporary password", &body)
            .await
            .map_err(|e| DomainError::Mail { message: e })?;

        info!(member_id, "temporary password issued");
        Ok(())
    }

    /// Change a member's password after re-checking the current one.
    ///
    /// The UPDATE is guarded by the hash we just validated; if another
    /// request changed it in between, zero rows come back and the caller is
    /// asked to retry.
    pub async fn update_password(
        &self,
        member_id: &str,
        current_pwd: &str,
        new_pwd: &str,
    ) -> DomainResult<()> {
        if member_id.trim().is_empty() || current_pwd.trim().is_empty() || new_pwd.trim().is_empty()
        {
            return Err(DomainError::validation("missing required field"));
        }
        let member_id = member_id.trim();

        let stored = self
            .repository
            .select_password_hash(member_id)
            .await?
            .ok_or(AuthError::PasswordMismatch)?;

        if !self.hasher.matches(current_pwd, &stored) {
            return Err(AuthError::PasswordMismatch.into());
        }
        if self.hasher.matches(new_pwd, &stored) {
            return Err(AuthError::PasswordReused.into());
        }

        let new_hash = self
            .hasher
            .encode(new_pwd)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))?;

        let rows = self
            .repository
            .update_password(member_id, &stored, &new_hash)
            .await?;
        if rows == 0 {
            return Err(AuthError::Conflict.into());
        }

        info!(member_id, "password changed");
        Ok(())
    }

    /// Delete an account after re-checking the password. The DELETE is
    /// guarded by the validated hash, same as `update_password`.
    pub async fn delete_account(&self, member_id: &str, current_pwd: &str) -> DomainResult<()> {
        if member_id.trim().is_empty() || current_pwd.trim().is_empty() {
            return Err(AuthError::PasswordMismatch.into());
        }
        let member_id = member_id.trim();

        let stored = self
            .repository
            .select_password_hash(member_id)
            .await?
            .ok_or(AuthError::PasswordMismatch)?;

        if !self.hasher.matches(current_pwd, &stored) {
            return Err(AuthError::PasswordMismatch.into());
        }

        let rows = self.repository.delete(member_id, &stored).await?;
        if rows == 0 {
            return Err(AuthError::Conflict.into());
        }

        info!(member_id, "account deleted");
        Ok(())
    }
}

/// Generate a temporary password from the OS CSPRNG
fn generate_temp_password() -> String {
    let mut rng = OsRng;
    (0..TEMP_PASSWORD_LEN)
        .map(|_| TEMP_PASSWORD_CHARS[rng.gen_range(0..TEMP_PASSWORD_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod password_tests {
    use super::*;

    #[test]
    fn temp_passwords_use_the_charset() {
        for _ in 0..20 {
            let pwd = generate_temp_password();
            assert_eq!(pwd.len(), TEMP_PASSWORD_LEN);
            assert!(pwd.bytes().all(|b| TEMP_PASSWORD_CHARS.contains(&b)));
        }
    }

    #[test]
    fn temp_passwords_vary() {
        let a = generate_temp_password();
        let b = generate_temp_password();
        assert_ne!(a, b);
    }
}
