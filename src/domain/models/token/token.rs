//! JWT 클레임과 클라이언트에 전달되는 토큰 쌍
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT 클레임 (RFC 7519 `sub`/`iat`/`exp` + 애플리케이션 클레임)
///
/// 개인정보 보호를 위해 이메일 등은 넣지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (ObjectId hex)
    pub sub: String,
    pub auth_provider: AuthProvider,
    pub roles: Vec<String>,
    pub token_type: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

/// 로그인 성공 시 발급되는 애플리케이션 자격 증명
///
/// OAuth 2.0 토큰 응답 형식을 따르며 응답 본문에는 평탄화되어 들어갑니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
