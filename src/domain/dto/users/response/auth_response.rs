//! 인증 결과 응답 DTO
//!
//! 로컬 로그인과 OAuth 콜백은 모두 애플리케이션 토큰 쌍을 발급하고,
//! 토큰 필드는 응답 최상위에 평탄화됩니다.

use serde::Serialize;

use super::user_response::UserResponse;
use crate::domain::models::token::TokenPair;

/// `POST /api/signup` 응답
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserResponse,
}

/// `POST /api/login` 응답
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

impl LoginResponse {
    pub fn new(user: UserResponse, tokens: TokenPair) -> Self {
        Self {
            message: "Login successful".to_string(),
            user,
            tokens,
        }
    }
}

/// 프로바이더별로 달라지는 콜백 응답 부분
///
/// - Google: 프론트엔드 로그인 완료 페이지로 이동할 URL
/// - Naver: 성공 메시지와 프로필 이름
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderOutcome {
    Redirect { redirect_url: String },
    Profile { message: String, name: Option<String> },
}

/// OAuth 콜백 성공 결과
///
/// Google 응답 예:
/// ```json
/// {"redirect_url": "http://localhost:3000/login-success/?email=x%40y.com",
///  "email": "x@y.com", "user": {...}, "access_token": "...", "refresh_token": "...",
///  "token_type": "Bearer", "expires_in": 86400}
/// ```
#[derive(Debug, Serialize)]
pub struct AuthenticationResult {
    #[serde(flatten)]
    pub outcome: ProviderOutcome,
    pub email: String,
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;

    fn user() -> UserResponse {
        UserResponse {
            id: "65f000000000000000000001".to_string(),
            email: "x@y.com".to_string(),
            display_name: "X".to_string(),
            auth_provider: AuthProvider::Google,
            is_oauth_user: true,
            is_active: true,
            is_email_verified: true,
            roles: vec!["user".to_string()],
            profile_image_url: None,
            last_login_at: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn tokens() -> TokenPair {
        TokenPair {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        }
    }

    #[test]
    fn test_redirect_outcome_is_flattened() {
        let result = AuthenticationResult {
            outcome: ProviderOutcome::Redirect {
                redirect_url: "http://front/login-success/?email=x%40y.com".to_string(),
            },
            email: "x@y.com".to_string(),
            user: user(),
            tokens: tokens(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["redirect_url"], "http://front/login-success/?email=x%40y.com");
        assert_eq!(json["email"], "x@y.com");
        assert_eq!(json["access_token"], "access");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_profile_outcome_is_flattened() {
        let result = AuthenticationResult {
            outcome: ProviderOutcome::Profile {
                message: "Naver login success".to_string(),
                name: Some("Kim".to_string()),
            },
            email: "x@y.com".to_string(),
            user: user(),
            tokens: tokens(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["message"], "Naver login success");
        assert_eq!(json["name"], "Kim");
        assert_eq!(json["refresh_token"], "refresh");
        assert!(json.get("redirect_url").is_none());
    }
}
