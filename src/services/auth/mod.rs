//! 인증 서비스 모듈
//!
//! OAuth 로그인 플로우와 애플리케이션 JWT 발급을 담당합니다.
//!
//! - [`state_service`] - CSRF 방지용 state 발급/소비/검증
//! - [`provider_client`] - 프로바이더 인가 URL, 토큰 교환, 프로필 조회
//! - [`account_resolver`] - 프로필 이메일로 계정 조회 또는 생성
//! - [`oauth_service`] - 위 구성 요소를 묶은 로그인 플로우
//! - [`token_service`] - JWT 액세스/리프레시 토큰
//!
//! # Examples
//!
//! ```rust,ignore
//! let url = context.google.begin(&session_id).await?;
//! // ... 사용자가 동의한 뒤 콜백으로 돌아오면
//! let result = context.google.complete(Some(&session_id), &query).await?;
//! ```

pub mod account_resolver;
pub mod oauth_service;
pub mod provider_client;
pub mod state_service;
pub mod token_service;

pub use account_resolver::AccountResolver;
pub use oauth_service::{OAuthContext, OAuthFlow, SessionCookiePolicy};
pub use provider_client::ProviderClient;
pub use state_service::StateService;
pub use token_service::TokenService;
