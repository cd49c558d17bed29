//! 인증 요청관련 DTO
//!
//! 가입, 로그인, 토큰 갱신, OAuth 콜백 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 리프레시 토큰 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LocalLoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 이메일/비밀번호 가입 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(
        min = 8,
        max = 128,
        message = "비밀번호는 8-128자 사이여야 합니다"
    ))]
    pub password: String,

    /// 표시 이름 (없으면 이메일 앞부분을 사용)
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: Option<String>,
}

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 모든 필드가 선택값입니다. 누락 여부는 콜백 처리 단계에서
/// 각각 별도의 에러로 판정합니다.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,

    /// 사용자가 동의를 거부했거나 프로바이더 에러가 발생한 경우
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_requires_long_password() {
        let request = SignupRequest {
            email: "cook@example.com".to_string(),
            password: "short".to_string(),
            name: None,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_signup_rejects_bad_email() {
        let request = SignupRequest {
            email: "not-an-email".to_string(),
            password: "long-enough-password".to_string(),
            name: Some("Cook".to_string()),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_callback_query_accepts_missing_fields() {
        let query: OAuthCallbackQuery = serde_json::from_str(r#"{"state":"S1"}"#).unwrap();

        assert!(query.code.is_none());
        assert_eq!(query.state.as_deref(), Some("S1"));
    }
}
