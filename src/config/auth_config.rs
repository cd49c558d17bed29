//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰, OAuth state 보관 정책 등 인증 관련 설정입니다.
//!
//! 프로바이더 자격 증명은 전역 상태가 아니라 [`ProviderConfig`] 값으로
//! 만들어져 각 OAuth 플로우에 명시적으로 주입됩니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8000/google/callback/"
//!
//! export NAVER_CLIENT_ID="your-naver-client-id"
//! export NAVER_SECRET_KEY="your-naver-secret"
//! export NAVER_REDIRECT_URI="http://localhost:8000/accounts/naver/login/callback/"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"   # production 에서는 필수
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! export OAUTH_STATE_TTL_SECONDS="600"
//! export OAUTH_HTTP_TIMEOUT_SECONDS="10"
//! export OAUTH_STATE_BACKEND="redis"              # redis | memory
//! export OAUTH_SECURE_COOKIES="false"
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const GOOGLE_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URI: &str = "https://www.googleapis.com/oauth2/v1/userinfo";
pub const GOOGLE_SCOPE: &str = "email profile";

pub const NAVER_AUTH_URI: &str = "https://nid.naver.com/oauth2.0/authorize";
pub const NAVER_TOKEN_URI: &str = "https://nid.naver.com/oauth2.0/token";
pub const NAVER_USERINFO_URI: &str = "https://openapi.naver.com/v1/nid/me";

/// 지원하는 인증 프로바이더
///
/// 사용자 문서와 JWT 클레임에 소문자 문자열로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 로컬 이메일/패스워드 인증
    Local,
    /// Google OAuth 2.0
    Google,
    /// Naver 로그인 (OAuth 2.0)
    Naver,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Naver => "naver",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "naver" => Ok(AuthProvider::Naver),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OAuth 프로바이더 한 곳의 자격 증명과 엔드포인트
///
/// 엔드포인트는 기본값이 있지만 환경 변수로 덮어쓸 수 있어서
/// 통합 테스트에서는 목 서버 주소를 넣어 사용합니다.
#[derive(Clone)]
pub struct ProviderConfig {
    pub provider: AuthProvider,
    pub client_id: String,
    pub client_secret: String,
    /// 프로바이더에 등록된 콜백 주소 (바이트 단위로 동일해야 함)
    pub redirect_uri: String,
    pub authorize_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
    pub scope: Option<String>,
}

// client_secret 은 로그에 남기지 않는다
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .field("authorize_uri", &self.authorize_uri)
            .field("token_uri", &self.token_uri)
            .field("userinfo_uri", &self.userinfo_uri)
            .field("scope", &self.scope)
            .finish()
    }
}

/// JWT 서명/만료 설정
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub refresh_expiration_days: i64,
}

impl JwtConfig {
    pub const DEVELOPMENT_SECRET: &'static str = "your-secret-key";

    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_hours * 3600
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_hours", &self.expiration_hours)
            .field("refresh_expiration_days", &self.refresh_expiration_days)
            .finish()
    }
}

/// OAuth state 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateBackend {
    /// 여러 인스턴스가 공유하는 Redis (기본값)
    Redis,
    /// 단일 프로세스 메모리
    Memory,
}

impl FromStr for StateBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(StateBackend::Redis),
            "memory" | "in-memory" => Ok(StateBackend::Memory),
            other => Err(format!("expected `redis` or `memory`, got `{}`", other)),
        }
    }
}

/// OAuth 플로우 공통 정책
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// 발급된 state 가 유효한 시간
    pub state_ttl_secs: u64,
    /// 토큰 교환/프로필 조회 각각의 타임아웃
    pub http_timeout_secs: u64,
    pub state_backend: StateBackend,
    /// 세션 쿠키에 Secure 속성을 붙일지 여부
    pub secure_cookies: bool,
}

impl OAuthConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
