//! OAuth 프로바이더 HTTP 클라이언트
//!
//! 프로바이더 하나(Google 또는 Naver)의 세 엔드포인트를 다룹니다.
//!
//! 1. 인가 URL 생성 (`authorize_uri`)
//! 2. 인가 코드 → 액세스 토큰 교환 (`token_uri`)
//! 3. 액세스 토큰으로 프로필 조회 (`userinfo_uri`)
//!
//! 외부 호출은 순차적으로 한 번씩만 수행하며, 재시도하지 않습니다.
//! 모든 호출은 `OAUTH_HTTP_TIMEOUT_SECONDS` 로 제한됩니다.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{AuthProvider, ProviderConfig};
use crate::domain::models::oauth::{
    GoogleUserInfo, NaverProfileEnvelope, ProviderProfile, ProviderTokenResponse,
};
use crate::errors::{AppError, AppResult, ProviderCallFailure};

/// 에러 응답 본문은 이 길이까지만 보관한다
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Clone)]
pub struct ProviderClient {
    config: ProviderConfig,
    http: reqwest::Client,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig, timeout: Duration) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigurationError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { config, http })
    }

    pub fn provider(&self) -> AuthProvider {
        self.config.provider
    }

    /// 프로바이더 동의 화면 URL
    ///
    /// 모든 파라미터는 form-urlencoded 로 인코딩되며 `redirect_uri` 는 설정값 그대로 쓴다.
    pub fn authorization_url(&self, state: &str) -> AppResult<String> {
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("state", state),
        ];
        if let Some(scope) = self.config.scope.as_deref() {
            params.push(("scope", scope));
        }

        let url = Url::parse_with_params(&self.config.authorize_uri, &params).map_err(|e| {
            AppError::ConfigurationError(format!(
                "{} authorize URI 가 올바르지 않습니다 ({}): {}",
                self.config.provider, self.config.authorize_uri, e
            ))
        })?;

        Ok(url.into())
    }

    /// 인가 코드를 액세스 토큰으로 교환
    ///
    /// Google 은 `redirect_uri` 를, Naver 는 `state` 를 함께 보내야 한다.
    pub async fn exchange_code(&self, code: &str, state: &str) -> Result<String, ProviderCallFailure> {
        let mut form = vec![
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
        ];
        match self.config.provider {
            AuthProvider::Naver => form.push(("state", state)),
            _ => form.push(("redirect_uri", self.config.redirect_uri.as_str())),
        }

        let request = self.http.post(&self.config.token_uri).form(&form);
        let token: ProviderTokenResponse = send_json(request).await?;

        token.into_access_token()
    }

    /// 액세스 토큰으로 프로필 조회
    pub async fn fetch_profile(&self, access_token: &str) -> Result<ProviderProfile, ProviderCallFailure> {
        let request = self
            .http
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token);

        match self.config.provider {
            AuthProvider::Naver => {
                let envelope: NaverProfileEnvelope = send_json(request).await?;
                ProviderProfile::try_from(envelope)
            }
            _ => {
                let info: GoogleUserInfo = send_json(request).await?;
                ProviderProfile::try_from(info)
            }
        }
    }
}

async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ProviderCallFailure> {
    let response = request.send().await.map_err(transport_failure)?;
    let status = response.status();
    let body = response.text().await.map_err(transport_failure)?;

    if !status.is_success() {
        log::warn!(
            "프로바이더 응답 상태 {}: {}",
            status.as_u16(),
            truncate(&body)
        );
        return Err(ProviderCallFailure::Status(status.as_u16()));
    }

    serde_json::from_str(&body).map_err(|e| ProviderCallFailure::MalformedResponse(e.to_string()))
}

fn transport_failure(e: reqwest::Error) -> ProviderCallFailure {
    if e.is_timeout() {
        ProviderCallFailure::Timeout
    } else {
        ProviderCallFailure::Network(e.to_string())
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
