//! Auth and account DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use gs_core::domain::entities::member::MemberProfile;

/// Uniform `{"ok": bool}` body used by the email-code and password
/// endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }

    pub fn failed() -> Self {
        Self { ok: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailCodeRequest {
    /// Raw email; normalization happens in the service
    pub member_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailCodeRequest {
    pub member_email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 50))]
    pub member_id: String,

    #[validate(length(min = 8, max = 72))]
    pub member_pwd: String,

    #[validate(length(min = 1, max = 50))]
    pub member_name: String,

    #[validate(email)]
    pub member_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub member_no: i64,
    pub member_id: String,
    pub member_name: String,
    pub member_email: String,
    pub member_role: String,
}

impl From<MemberProfile> for SignupResponse {
    fn from(profile: MemberProfile) -> Self {
        Self {
            member_no: profile.member_no,
            member_id: profile.member_id,
            member_name: profile.member_name,
            member_email: profile.member_email,
            member_role: profile.member_role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub member_id: String,
    pub member_pwd: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub member_no: i64,
    pub member_id: String,
    pub member_name: String,
    pub member_email: String,
    pub member_role: String,

    /// Bearer token for authenticated endpoints
    pub access_token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub member_id: String,
    pub member_no: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIdQuery {
    pub member_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckEmailQuery {
    pub member_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub member_id: String,
    pub member_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub current_pwd: String,
    pub new_pwd: String,
    pub confirm_pwd: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccountRequest {
    pub password: String,
}
