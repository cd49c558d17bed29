//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용해 모든 에러를
//! `{"error": <code>, "message": <text>}` 형태의 JSON 응답으로 변환합니다.
//!
//! OAuth 콜백 처리 중 발생하는 에러는 [`OAuthError`] 로 분리되어 있고,
//! 프로바이더 호출 실패는 [`ProviderCallFailure`] 로 원인을 구분합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! async fn create_post(req: CreatePostRequest) -> AppResult<Post> {
//!     if req.title.trim().is_empty() {
//!         return Err(AppError::ValidationError("제목은 필수입니다".to_string()));
//!     }
//!     post_repo.create(req.into()).await
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::config::AuthProvider;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 관련 에러 (500)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 토큰 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 로그인 실패 (401). 어떤 값이 틀렸는지는 알려주지 않는다.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 권한 부족 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 요청 본문이 너무 큼 (413)
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// 지원하지 않는 미디어 타입 (415)
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// 잘못된 서버 설정 (500)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// OAuth 콜백 처리 실패
    #[error(transparent)]
    OAuth(#[from] OAuthError),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어갈 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "database_error",
            AppError::RedisError(_) => "cache_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::AuthenticationError(_) => "authentication_required",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::AuthorizationError(_) => "forbidden",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::UnsupportedMediaType(_) => "unsupported_media_type",
            AppError::ConfigurationError(_) => "configuration_error",
            AppError::OAuth(e) => e.code(),
            AppError::InternalError(_) => "internal_error",
        }
    }

    fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) | AppError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::OAuth(e) => e.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 내부 상세 내용을 로그에만 남기고 응답에는 일반 메시지만 보냅니다.
    fn error_response(&self) -> HttpResponse {
        let message = if self.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
            "요청을 처리하는 중 서버 오류가 발생했습니다".to_string()
        } else {
            self.to_string()
        };

        let mut body = json!({
            "error": self.code(),
            "message": message,
        });

        if let AppError::OAuth(oauth) = self {
            if let Some(failure) = oauth.provider_failure() {
                body["kind"] = json!(failure.kind());
            }
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// OAuth 콜백 처리 에러
///
/// 콜백 상태 머신의 어느 단계에서 거부되었는지를 나타냅니다.
/// 어떤 에러도 재시도하지 않고 그대로 클라이언트에 전달됩니다.
#[derive(Error, Debug)]
pub enum OAuthError {
    /// 사용자가 동의 화면에서 거부했거나 프로바이더가 `error=` 로 돌려보낸 경우
    #[error("Authorization was denied by the provider: {0}")]
    AuthorizationDenied(String),

    #[error("Code is missing")]
    MissingAuthorizationCode,

    #[error("Invalid state parameter")]
    StateMismatch,

    #[error("Token exchange with {provider} failed: {failure}")]
    ProviderTokenExchangeFailure {
        provider: AuthProvider,
        failure: ProviderCallFailure,
    },

    #[error("Profile fetch from {provider} failed: {failure}")]
    ProviderProfileFetchFailure {
        provider: AuthProvider,
        failure: ProviderCallFailure,
    },

    #[error("Could not resolve application identity: {0}")]
    IdentityResolutionFailure(String),
}

impl OAuthError {
    pub fn code(&self) -> &'static str {
        match self {
            OAuthError::AuthorizationDenied(_) => "authorization_denied",
            OAuthError::MissingAuthorizationCode => "missing_authorization_code",
            OAuthError::StateMismatch => "state_mismatch",
            OAuthError::ProviderTokenExchangeFailure { .. } => "provider_token_exchange_failed",
            OAuthError::ProviderProfileFetchFailure { .. } => "provider_profile_fetch_failed",
            OAuthError::IdentityResolutionFailure(_) => "identity_resolution_failed",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            OAuthError::AuthorizationDenied(_)
            | OAuthError::MissingAuthorizationCode
            | OAuthError::StateMismatch => StatusCode::BAD_REQUEST,
            OAuthError::ProviderTokenExchangeFailure { .. }
            | OAuthError::ProviderProfileFetchFailure { .. } => StatusCode::FAILED_DEPENDENCY,
            OAuthError::IdentityResolutionFailure(_) => StatusCode::CONFLICT,
        }
    }

    pub fn provider_failure(&self) -> Option<&ProviderCallFailure> {
        match self {
            OAuthError::ProviderTokenExchangeFailure { failure, .. }
            | OAuthError::ProviderProfileFetchFailure { failure, .. } => Some(failure),
            _ => None,
        }
    }
}

/// 프로바이더 HTTP 호출 실패 원인
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderCallFailure {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    /// 응답 본문은 로그에만 남긴다
    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// 2xx 응답이지만 본문에 프로바이더 에러가 담긴 경우
    #[error("provider returned error `{error}`: {description}")]
    Rejected { error: String, description: String },

    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}

impl ProviderCallFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderCallFailure::Network(_) => "network",
            ProviderCallFailure::Timeout => "timeout",
            ProviderCallFailure::Status(_) => "status",
            ProviderCallFailure::MalformedResponse(_) => "malformed_response",
            ProviderCallFailure::Rejected { .. } => "rejected",
            ProviderCallFailure::MissingField(_) => "missing_field",
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
