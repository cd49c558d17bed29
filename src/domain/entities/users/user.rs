//! User Entity Implementation
//!
//! 로컬 가입과 OAuth 로그인을 모두 지원하는 통합 사용자 모델입니다.
//! 이메일이 계정의 유일한 식별 키이며, 같은 이메일로 들어온 로그인은
//! 어느 프로바이더를 거쳤든 같은 계정으로 연결됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// OAuth 프로바이더가 알려준 부가 정보
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OAuthData {
    /// 프로바이더 내부 사용자 ID (Google `id`, Naver `response.id`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// 사용자 엔티티 (`users` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 소문자로 정규화된 이메일 (유니크 인덱스)
    pub email: String,

    pub display_name: String,

    /// 로컬 가입 사용자만 가진다
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    /// 계정을 처음 만든 인증 방식
    pub auth_provider: AuthProvider,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_data: Option<OAuthData>,

    pub is_active: bool,
    pub is_email_verified: bool,
    pub roles: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 이메일/비밀번호 가입 사용자 생성
    pub fn new_local(email: String, display_name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            display_name,
            password_hash: Some(password_hash),
            auth_provider: AuthProvider::Local,
            oauth_data: None,
            is_active: true,
            is_email_verified: false,
            roles: vec!["user".to_string()],
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 첫 OAuth 로그인 시 사용자 생성
    ///
    /// 프로바이더가 이메일 소유를 확인했으므로 이메일 인증 완료 상태로 만든다.
    pub fn new_oauth(
        email: String,
        display_name: String,
        auth_provider: AuthProvider,
        oauth_data: OAuthData,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            display_name,
            password_hash: None,
            auth_provider,
            oauth_data: Some(oauth_data),
            is_active: true,
            is_email_verified: true,
            roles: vec!["user".to_string()],
            last_login_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash.is_some()
    }

    pub fn profile_image_url(&self) -> Option<&str> {
        self.oauth_data
            .as_ref()
            .and_then(|data| data.profile_image_url.as_deref())
    }
}

/// 이메일 비교용 정규화 (앞뒤 공백 제거 + 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user() {
        let user = User::new_local(
            "cook@example.com".to_string(),
            "cook".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert_eq!(user.auth_provider, AuthProvider::Local);
        assert!(user.can_authenticate_with_password());
        assert!(!user.is_email_verified);
        assert_eq!(user.roles, vec!["user".to_string()]);
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_new_oauth_user_has_no_password() {
        let user = User::new_oauth(
            "x@y.com".to_string(),
            "X".to_string(),
            AuthProvider::Naver,
            OAuthData {
                provider_user_id: Some("naver-1".to_string()),
                profile_image_url: Some("https://img.example/p.png".to_string()),
            },
        );

        assert!(!user.can_authenticate_with_password());
        assert!(user.is_email_verified);
        assert!(user.last_login_at.is_some());
        assert_eq!(user.profile_image_url(), Some("https://img.example/p.png"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  X@Y.Com "), "x@y.com");
    }
}
