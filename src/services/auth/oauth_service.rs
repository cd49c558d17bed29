//! # OAuth 로그인 플로우
//!
//! 프로바이더 하나에 대한 로그인 시작과 콜백 처리를 담당합니다.
//!
//! ```text
//! begin:    state 발급/저장 ──► 인가 URL
//!
//! complete: AWAITING_CODE ─► STATE_VALIDATED ─► TOKEN_EXCHANGED
//!                                                     │
//!           AuthenticationResult ◄─ IDENTITY_RESOLVED ◄─ PROFILE_FETCHED
//! ```
//!
//! 어느 단계에서든 실패하면 즉시 [`OAuthError`] 로 끝나며 다음 단계는 실행하지 않습니다.
//! 저장된 state 는 콜백 처리 첫 단계에서 꺼내 삭제하므로 결과와 상관없이 한 번만 쓰입니다.

use crate::config::AuthProvider;
use crate::domain::dto::users::request::OAuthCallbackQuery;
use crate::domain::dto::users::response::{AuthenticationResult, ProviderOutcome, UserResponse};
use crate::domain::entities::users::User;
use crate::domain::models::oauth::ProviderProfile;
use crate::errors::{AppResult, OAuthError};
use crate::services::auth::{AccountResolver, ProviderClient, StateService, TokenService};

pub const NAVER_SUCCESS_MESSAGE: &str = "Naver login success";

#[derive(Clone)]
pub struct OAuthFlow {
    client: ProviderClient,
    states: StateService,
    resolver: AccountResolver,
    tokens: TokenService,
    frontend_url: String,
}

impl OAuthFlow {
    pub fn new(
        client: ProviderClient,
        states: StateService,
        resolver: AccountResolver,
        tokens: TokenService,
        frontend_url: String,
    ) -> Self {
        Self {
            client,
            states,
            resolver,
            tokens,
            frontend_url,
        }
    }

    pub fn provider(&self) -> AuthProvider {
        self.client.provider()
    }

    /// 새 state 를 저장하고 동의 화면 URL 을 돌려준다.
    pub async fn begin(&self, session_id: &str) -> AppResult<String> {
        let state = self.states.issue(session_id, self.provider()).await?;
        let url = self.client.authorization_url(&state.value)?;

        log::info!("{} 로그인 시작: state={}", self.provider(), state.fingerprint());

        Ok(url)
    }

    /// 콜백 처리
    ///
    /// `session_id` 가 없으면(세션 쿠키 없음) 저장된 state 도 없으므로 state 불일치가 된다.
    pub async fn complete(
        &self,
        session_id: Option<&str>,
        query: &OAuthCallbackQuery,
    ) -> AppResult<AuthenticationResult> {
        let provider = self.provider();

        let stored = match session_id {
            Some(session_id) => self.states.consume(session_id).await?,
            None => None,
        };

        if let Some(error) = query.error.as_deref() {
            let description = query.error_description.as_deref().unwrap_or_default();
            log::warn!("{} 인가 거부: {} {}", provider, error, description);
            return Err(OAuthError::AuthorizationDenied(error.to_string()).into());
        }

        let code = query
            .code
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or(OAuthError::MissingAuthorizationCode)?;

        let state = query.state.as_deref();
        self.states.validate(stored.as_ref(), provider, state)?;

        let access_token = self
            .client
            .exchange_code(code, state.unwrap_or_default())
            .await
            .map_err(|failure| {
                log::warn!("{} 토큰 교환 실패: {}", provider, failure);
                OAuthError::ProviderTokenExchangeFailure { provider, failure }
            })?;

        let profile = self
            .client
            .fetch_profile(&access_token)
            .await
            .map_err(|failure| {
                log::warn!("{} 프로필 조회 실패: {}", provider, failure);
                OAuthError::ProviderProfileFetchFailure { provider, failure }
            })?;

        let user = self.resolver.resolve(provider, &profile).await?;
        let tokens = self.tokens.generate_token_pair(&user)?;

        log::info!("{} 로그인 성공: {}", provider, user.email);

        Ok(AuthenticationResult {
            outcome: self.outcome(&user, &profile),
            email: user.email.clone(),
            user: UserResponse::from(user),
            tokens,
        })
    }

    fn outcome(&self, user: &User, profile: &ProviderProfile) -> ProviderOutcome {
        match self.provider() {
            AuthProvider::Naver => ProviderOutcome::Profile {
                message: NAVER_SUCCESS_MESSAGE.to_string(),
                name: profile.name.clone(),
            },
            _ => ProviderOutcome::Redirect {
                redirect_url: login_success_url(&self.frontend_url, &user.email),
            },
        }
    }
}

/// 프론트엔드 로그인 완료 페이지 주소
pub fn login_success_url(frontend_url: &str, email: &str) -> String {
    format!(
        "{}/login-success/?email={}",
        frontend_url.trim_end_matches('/'),
        urlencoding::encode(email)
    )
}

/// `oauth_session` 쿠키 속성
#[derive(Debug, Clone, Copy)]
pub struct SessionCookiePolicy {
    pub secure: bool,
    pub max_age_secs: u64,
}

/// 핸들러에 주입되는 OAuth 구성 요소 묶음
#[derive(Clone)]
pub struct OAuthContext {
    pub google: OAuthFlow,
    pub naver: OAuthFlow,
    pub cookie: SessionCookiePolicy,
}
