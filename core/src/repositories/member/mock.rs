//! In-memory member repository for tests and mock wiring.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::member::Member;
use crate::errors::DomainError;

use super::MemberRepository;

/// HashMap-backed `MemberRepository` keyed by `member_id`
#[derive(Default)]
pub struct MockMemberRepository {
    members: Mutex<HashMap<String, Member>>,
    next_no: Mutex<i64>,
}

impl MockMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored members (test helper)
    pub fn len(&self) -> usize {
        self.members.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn insert(&self, mut member: Member) -> Result<Member, DomainError> {
        let mut next_no = self.next_no.lock().unwrap();
        *next_no += 1;
        member.member_no = *next_no;
        member.created_at = Some(Utc::now());

        self.members
            .lock()
            .unwrap()
            .insert(member.member_id.clone(), member.clone());
        Ok(member)
    }

    async fn find_by_member_id(&self, member_id: &str) -> Result<Option<Member>, DomainError> {
        Ok(self.members.lock().unwrap().get(member_id).cloned())
    }

    async fn count_by_member_id(&self, member_id: &str) -> Result<i64, DomainError> {
        Ok(self.members.lock().unwrap().contains_key(member_id) as i64)
    }

    async fn count_by_email(&self, member_email: &str) -> Result<i64, DomainError> {
        // Email comparisons are case-insensitive, like MySQL's default
        // collation in the real repository.
        let members = self.members.lock().unwrap();
        Ok(members
            .values()
            .filter(|m| m.member_email.eq_ignore_ascii_case(member_email))
            .count() as i64)
    }

    async fn update_last_login(&self, member_id: &str) -> Result<(), DomainError> {
        if let Some(member) = self.members.lock().unwrap().get_mut(member_id) {
            member.last_login_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn select_password_hash(&self, member_id: &str) -> Result<Option<String>, DomainError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .get(member_id)
            .map(|m| m.member_pwd.clone()))
    }

    async fn update_password(
        &self,
        member_id: &str,
        old_hash: &str,
        new_hash: &str,
    ) -> Result<u64, DomainError> {
        let mut members = self.members.lock().unwrap();
        match members.get_mut(member_id) {
            Some(member) if member.member_pwd == old_hash => {
                member.member_pwd = new_hash.to_string();
                member.updated_at = Some(Utc::now());
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn reset_password(
        &self,
        member_id: &str,
        member_email: &str,
        new_hash: &str,
    ) -> Result<u64, DomainError> {
        let mut members = self.members.lock().unwrap();
        match members.get_mut(member_id) {
            Some(member) if member.member_email.eq_ignore_ascii_case(member_email) => {
                member.member_pwd = new_hash.to_string();
                member.updated_at = Some(Utc::now());
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete(&self, member_id: &str, pwd_hash: &str) -> Result<u64, DomainError> {
        let mut members = self.members.lock().unwrap();
        match members.get(member_id) {
            Some(member) if member.member_pwd == pwd_hash => {
                members.remove(member_id);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}
