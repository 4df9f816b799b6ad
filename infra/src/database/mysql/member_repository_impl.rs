//! MySQL implementation of the MemberRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use gs_core::domain::entities::member::Member;
use gs_core::errors::DomainError;
use gs_core::repositories::member::MemberRepository;

/// MySQL-backed member repository
pub struct MySqlMemberRepository {
    pool: MySqlPool,
}

impl MySqlMemberRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_member(row: &sqlx::mysql::MySqlRow) -> Result<Member, DomainError> {
        Ok(Member {
            member_no: row.try_get("member_no").map_err(db_err)?,
            member_id: row.try_get("member_id").map_err(db_err)?,
            member_pwd: row.try_get("member_pwd").map_err(db_err)?,
            member_name: row.try_get("member_name").map_err(db_err)?,
            member_email: row.try_get("member_email").map_err(db_err)?,
            member_role: row.try_get("member_role").map_err(db_err)?,
            created_at: row
                .try_get::<Option<DateTime<Utc>>, _>("created_at")
                .map_err(db_err)?,
            updated_at: row
                .try_get::<Option<DateTime<Utc>>, _>("updated_at")
                .map_err(db_err)?,
            last_login_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login_at")
                .map_err(db_err)?,
            is_active: row.try_get("is_active").map_err(db_err)?,
        })
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("member query failed: {e}"),
    }
}

#[async_trait]
impl MemberRepository for MySqlMemberRepository {
    async fn insert(&self, mut member: Member) -> Result<Member, DomainError> {
        let query = r#"
            INSERT INTO member (
                member_id, member_pwd, member_name, member_email, member_role,
                created_at, is_active
            ) VALUES (?, ?, ?, ?, ?, NOW(), 1)
        "#;

        let result = sqlx::query(query)
            .bind(&member.member_id)
            .bind(&member.member_pwd)
            .bind(&member.member_name)
            .bind(&member.member_email)
            .bind(&member.member_role)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        member.member_no = result.last_insert_id() as i64;
        Ok(member)
    }

    async fn find_by_member_id(&self, member_id: &str) -> Result<Option<Member>, DomainError> {
        let query = r#"
            SELECT member_no, member_id, member_pwd, member_name, member_email,
                   member_role, created_at, updated_at, last_login_at, is_active
            FROM member
            WHERE member_id = ? AND is_active = 1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.as_ref().map(Self::row_to_member).transpose()
    }

    async fn count_by_member_id(&self, member_id: &str) -> Result<i64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM member WHERE member_id = ?")
            .bind(member_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        row.try_get("cnt").map_err(db_err)
    }

    async fn count_by_email(&self, member_email: &str) -> Result<i64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM member WHERE member_email = ?")
            .bind(member_email)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        row.try_get("cnt").map_err(db_err)
    }

    async fn update_last_login(&self, member_id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE member SET last_login_at = NOW() WHERE member_id = ?")
            .bind(member_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn select_password_hash(&self, member_id: &str) -> Result<Option<String>, DomainError> {
        let row = sqlx::query("SELECT member_pwd FROM member WHERE member_id = ? AND is_active = 1")
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(|r| r.try_get("member_pwd").map_err(db_err))
            .transpose()
    }

    async fn update_password(
        &self,
        member_id: &str,
        old_hash: &str,
        new_hash: &str,
    ) -> Result<u64, DomainError> {
        // The old hash in the WHERE clause turns a concurrent change into
        // zero affected rows.
        let query = r#"
            UPDATE member
            SET member_pwd = ?, updated_at = NOW()
            WHERE member_id = ? AND member_pwd = ?
        "#;

        let result = sqlx::query(query)
            .bind(new_hash)
            .bind(member_id)
            .bind(old_hash)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected())
    }

    async fn reset_password(
        &self,
        member_id: &str,
        member_email: &str,
        new_hash: &str,
    ) -> Result<u64, DomainError> {
        let query = r#"
            UPDATE member
            SET member_pwd = ?, updated_at = NOW()
            WHERE member_id = ? AND LOWER(member_email) = ? AND is_active = 1
        "#;

        let result = sqlx::query(query)
            .bind(new_hash)
            .bind(member_id)
            .bind(member_email)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, member_id: &str, pwd_hash: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM member WHERE member_id = ? AND member_pwd = ?")
            .bind(member_id)
            .bind(pwd_hash)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected())
    }
}
