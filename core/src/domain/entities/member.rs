//! Member entity and its public projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered member as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Auto-generated numeric key
    pub member_no: i64,

    /// Login id chosen by the member
    pub member_id: String,

    /// Bcrypt hash of the password; never leaves the domain layer
    pub member_pwd: String,

    /// Display name
    pub member_name: String,

    /// Contact email
    pub member_email: String,

    /// Role string, `ROLE_USER` by default
    pub member_role: String,

    /// Registration timestamp
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification timestamp
    pub updated_at: Option<DateTime<Utc>>,

    /// Most recent successful login
    pub last_login_at: Option<DateTime<Utc>>,

    /// Soft-delete flag
    pub is_active: bool,
}

impl Member {
    /// Public projection of this member (no password hash)
    pub fn profile(&self) -> MemberProfile {
        MemberProfile {
            member_no: self.member_no,
            member_id: self.member_id.clone(),
            member_name: self.member_name.clone(),
            member_email: self.member_email.clone(),
            member_role: self.member_role.clone(),
        }
    }
}

/// The subset of member fields exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub member_no: i64,
    pub member_id: String,
    pub member_name: String,
    pub member_email: String,
    pub member_role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_omits_password_hash() {
        let member = Member {
            member_no: 7,
            member_id: "alice".to_string(),
            member_pwd: "$2b$12$hash".to_string(),
            member_name: "Alice".to_string(),
            member_email: "alice@example.com".to_string(),
            member_role: "ROLE_USER".to_string(),
            created_at: None,
            updated_at: None,
            last_login_at: None,
            is_active: true,
        };

        let profile = member.profile();
        assert_eq!(profile.member_no, 7);
        assert_eq!(profile.member_id, "alice");

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("hash"));
    }
}
