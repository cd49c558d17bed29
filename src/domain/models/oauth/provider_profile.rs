//! 프로바이더 응답 모델
//!
//! 토큰 엔드포인트와 사용자 정보 엔드포인트의 JSON 을 받아
//! 프로바이더 공통 형태인 [`ProviderProfile`] 로 변환합니다.
//! 모든 필드를 `Option` 으로 받아서, 필드 누락을 역직렬화 에러가 아니라
//! [`ProviderCallFailure::MissingField`] 로 구분합니다.

use serde::Deserialize;

use crate::errors::ProviderCallFailure;

/// 콜백 한 번 동안만 쓰이는 프로바이더 프로필 (저장하지 않음)
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    pub email: String,
    pub name: Option<String>,
    pub provider_user_id: Option<String>,
    pub picture: Option<String>,
}

/// 토큰 엔드포인트 응답 (Google/Naver 공통)
///
/// Naver 는 실패해도 200 으로 `error` / `error_description` 을 돌려준다.
#[derive(Debug, Deserialize)]
pub struct ProviderTokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl ProviderTokenResponse {
    pub fn into_access_token(self) -> Result<String, ProviderCallFailure> {
        if let Some(error) = self.error {
            return Err(ProviderCallFailure::Rejected {
                error,
                description: self.error_description.unwrap_or_default(),
            });
        }

        self.access_token
            .filter(|token| !token.is_empty())
            .ok_or(ProviderCallFailure::MissingField("access_token"))
    }
}

/// Google `oauth2/v1/userinfo` 응답
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl TryFrom<GoogleUserInfo> for ProviderProfile {
    type Error = ProviderCallFailure;

    fn try_from(info: GoogleUserInfo) -> Result<Self, Self::Error> {
        Ok(Self {
            email: require_email(info.email)?,
            name: non_empty(info.name),
            provider_user_id: info.id,
            picture: non_empty(info.picture),
        })
    }
}

/// Naver `v1/nid/me` 응답
///
/// ```json
/// {"resultcode": "00", "message": "success", "response": {"email": "...", "name": "..."}}
/// ```
#[derive(Debug, Deserialize)]
pub struct NaverProfileEnvelope {
    pub resultcode: Option<String>,
    pub message: Option<String>,
    pub response: Option<NaverProfile>,
}

#[derive(Debug, Deserialize)]
pub struct NaverProfile {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub profile_image: Option<String>,
}

impl TryFrom<NaverProfileEnvelope> for ProviderProfile {
    type Error = ProviderCallFailure;

    fn try_from(envelope: NaverProfileEnvelope) -> Result<Self, Self::Error> {
        let resultcode = envelope.resultcode.unwrap_or_default();
        if resultcode != "00" {
            return Err(ProviderCallFailure::Rejected {
                error: resultcode,
                description: envelope.message.unwrap_or_default(),
            });
        }

        let profile = envelope
            .response
            .ok_or(ProviderCallFailure::MissingField("response"))?;

        Ok(Self {
            email: require_email(profile.email)?,
            name: non_empty(profile.name).or(non_empty(profile.nickname)),
            provider_user_id: profile.id,
            picture: non_empty(profile.profile_image),
        })
    }
}

fn require_email(email: Option<String>) -> Result<String, ProviderCallFailure> {
    non_empty(email).ok_or(ProviderCallFailure::MissingField("email"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_with_error_is_rejected() {
        let response: ProviderTokenResponse = serde_json::from_str(
            r#"{"error":"invalid_request","error_description":"no valid data in session"}"#,
        )
        .unwrap();

        assert_eq!(
            response.into_access_token().unwrap_err(),
            ProviderCallFailure::Rejected {
                error: "invalid_request".to_string(),
                description: "no valid data in session".to_string(),
            }
        );
    }

    #[test]
    fn test_token_response_without_access_token() {
        let response: ProviderTokenResponse =
            serde_json::from_str(r#"{"access_token":"","token_type":"bearer"}"#).unwrap();

        assert_eq!(
            response.into_access_token().unwrap_err(),
            ProviderCallFailure::MissingField("access_token")
        );
    }

    #[test]
    fn test_google_profile() {
        let info: GoogleUserInfo = serde_json::from_str(
            r#"{"id":"1","email":"x@y.com","verified_email":true,"name":"X","picture":""}"#,
        )
        .unwrap();
        let profile = ProviderProfile::try_from(info).unwrap();

        assert_eq!(profile.email, "x@y.com");
        assert_eq!(profile.name.as_deref(), Some("X"));
        assert_eq!(profile.picture, None);
    }

    #[test]
    fn test_google_profile_without_email() {
        let info: GoogleUserInfo = serde_json::from_str(r#"{"id":"1","name":"X"}"#).unwrap();

        assert_eq!(
            ProviderProfile::try_from(info).unwrap_err(),
            ProviderCallFailure::MissingField("email")
        );
    }

    #[test]
    fn test_naver_profile_falls_back_to_nickname() {
        let envelope: NaverProfileEnvelope = serde_json::from_str(
            r#"{"resultcode":"00","message":"success","response":{"id":"n1","email":"kim@naver.com","nickname":"kimchef"}}"#,
        )
        .unwrap();
        let profile = ProviderProfile::try_from(envelope).unwrap();

        assert_eq!(profile.email, "kim@naver.com");
        assert_eq!(profile.name.as_deref(), Some("kimchef"));
        assert_eq!(profile.provider_user_id.as_deref(), Some("n1"));
    }

    #[test]
    fn test_naver_error_resultcode() {
        let envelope: NaverProfileEnvelope = serde_json::from_str(
            r#"{"resultcode":"024","message":"Authentication failed"}"#,
        )
        .unwrap();

        assert_eq!(
            ProviderProfile::try_from(envelope).unwrap_err().kind(),
            "rejected"
        );
    }
}
