//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 로컬 로그인과 OAuth 콜백이 같은 토큰 쌍을 발급받습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::entities::users::User;
use crate::domain::models::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::{AppError, AppResult};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 액세스 토큰은 `JWT_EXPIRATION_HOURS`,
/// 리프레시 토큰은 `JWT_REFRESH_EXPIRATION_DAYS` 동안 유효합니다.
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    fn issue(&self, user: &User, kind: TokenKind, lifetime: Duration) -> AppResult<String> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            auth_provider: user.auth_provider,
            roles: user.roles.clone(),
            token_type: kind,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        self.issue(
            user,
            TokenKind::Access,
            Duration::hours(self.config.expiration_hours),
        )
    }

    /// 리프레시 토큰은 `POST /api/token/refresh` 에서만 받아준다.
    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        self.issue(
            user,
            TokenKind::Refresh,
            Duration::days(self.config.refresh_expiration_days),
        )
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user)?,
            refresh_token: self.generate_refresh_token(user)?,
            token_type: "Bearer".to_string(),
            expires_in: self.config.expires_in_seconds(),
        })
    }

    /// 서명과 만료를 검증하고 클레임을 돌려준다.
    ///
    /// 서명 불일치, 형식 오류, 만료는 모두 `AuthenticationError` (401) 입니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.config.secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })
    }

    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify_kind(token, TokenKind::Access)
    }

    pub fn verify_refresh_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify_kind(token, TokenKind::Refresh)
    }

    fn verify_kind(&self, token: &str, expected: TokenKind) -> AppResult<TokenClaims> {
        let claims = self.verify_token(token)?;

        if claims.token_type != expected {
            return Err(AppError::AuthenticationError(
                "토큰 용도가 올바르지 않습니다".to_string(),
            ));
        }

        Ok(claims)
    }

    /// `Authorization: Bearer {token}` 헤더에서 토큰 부분만 추출
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn service() -> TokenService {
        TokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            refresh_expiration_days: 7,
        })
    }

    fn user() -> User {
        let mut user = User::new_local(
            "x@y.com".to_string(),
            "X".to_string(),
            "hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_token_pair_round_trip() {
        let service = service();
        let user = user();

        let pair = service.generate_token_pair(&user).unwrap();
        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 3600);

        let claims = service.verify_access_token(&pair.access_token).unwrap();
        assert_eq!(Some(claims.sub), user.id_string());
        assert_eq!(claims.roles, vec!["user".to_string()]);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let service = service();
        let pair = service.generate_token_pair(&user()).unwrap();

        assert!(service.verify_access_token(&pair.refresh_token).is_err());
        assert!(service.verify_refresh_token(&pair.refresh_token).is_ok());
        assert!(service.verify_refresh_token(&pair.access_token).is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = TokenService::new(JwtConfig {
            secret: "other-secret".to_string(),
            expiration_hours: 1,
            refresh_expiration_days: 7,
        });
        let token = other.generate_access_token(&user()).unwrap();

        assert!(matches!(
            service().verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_user_without_id_cannot_get_token() {
        let mut user = user();
        user.id = None;

        assert!(service().generate_access_token(&user).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc").unwrap(), "abc");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
