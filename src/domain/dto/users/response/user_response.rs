use serde::Serialize;

use crate::config::AuthProvider;
use crate::domain::dto::format_datetime;
use crate::domain::entities::users::User;

/// 사용자 응답 DTO (비밀번호 해시 등 민감 정보 제외)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,

    /// 계정을 만든 인증 방식
    pub auth_provider: AuthProvider,

    /// OAuth 로 만들어진 계정인지 여부 (편의 필드)
    pub is_oauth_user: bool,

    pub is_active: bool,
    pub is_email_verified: bool,
    pub roles: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let profile_image_url = user.profile_image_url().map(str::to_string);
        let User {
            id,
            email,
            display_name,
            auth_provider,
            is_active,
            is_email_verified,
            roles,
            last_login_at,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            display_name,
            auth_provider,
            is_oauth_user: !matches!(auth_provider, AuthProvider::Local),
            is_active,
            is_email_verified,
            roles,
            profile_image_url,
            last_login_at: last_login_at.as_ref().map(format_datetime),
            created_at: format_datetime(&created_at),
        }
    }
}
