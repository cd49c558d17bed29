//! 애플리케이션 전체 설정
//!
//! 시작 시점에 환경 변수를 한 번 읽어 [`AppConfig`] 를 만들고,
//! 이후에는 이 값을 각 서비스 생성자에 넘겨줍니다.
//! 필수 값이 없거나 숫자 파싱에 실패하면 [`ConfigError`] 로 서버 기동을 중단합니다.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use super::auth_config::{
    AuthProvider, JwtConfig, OAuthConfig, ProviderConfig, StateBackend, GOOGLE_AUTH_URI,
    GOOGLE_SCOPE, GOOGLE_TOKEN_URI, GOOGLE_USERINFO_URI, NAVER_AUTH_URI, NAVER_TOKEN_URI,
    NAVER_USERINFO_URI,
};
use super::data_config::{
    DatabaseConfig, Environment, MediaConfig, PasswordConfig, RateLimitConfig, ServerConfig,
};

/// 설정 로딩 에러
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("필수 환경 변수 {0} 가 설정되지 않았습니다")]
    Missing(&'static str),

    #[error("환경 변수 {key} 의 값 `{value}` 이(가) 올바르지 않습니다: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// 서비스 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub database: DatabaseConfig,
    pub redis_url: String,
    /// 로그인 성공 후 돌아갈 프론트엔드 주소
    pub frontend_url: String,
    pub cors_origins: Vec<String>,
    pub jwt: JwtConfig,
    pub oauth: OAuthConfig,
    pub google: ProviderConfig,
    pub naver: ProviderConfig,
    pub password: PasswordConfig,
    pub media: MediaConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 key-value 조회 함수로 설정을 구성합니다.
    ///
    /// 테스트에서는 프로세스 환경을 건드리지 않고 `HashMap` 기반 조회를 넘깁니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let environment = vars
            .optional("ENVIRONMENT")
            .map(|v| v.parse::<Environment>().unwrap_or(Environment::Production))
            .unwrap_or(Environment::Production);

        let frontend_url = vars.required("FRONTEND_URL")?.trim_end_matches('/').to_string();

        let mut cors_origins: Vec<String> = vars
            .optional("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|origin| origin.trim().trim_end_matches('/').to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if !cors_origins.contains(&frontend_url) {
            cors_origins.push(frontend_url.clone());
        }

        let jwt_secret = match vars.optional("JWT_SECRET") {
            Some(secret) => secret,
            None if environment.is_production() => return Err(ConfigError::Missing("JWT_SECRET")),
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                JwtConfig::DEVELOPMENT_SECRET.to_string()
            }
        };

        let bcrypt_cost = match vars.optional("BCRYPT_COST") {
            Some(_) => {
                let cost: u32 = vars.parse_or("BCRYPT_COST", 0)?;
                if !(PasswordConfig::MIN_COST..=PasswordConfig::MAX_COST).contains(&cost) {
                    return Err(ConfigError::Invalid {
                        key: "BCRYPT_COST",
                        value: cost.to_string(),
                        reason: format!(
                            "{}..={} 범위여야 합니다",
                            PasswordConfig::MIN_COST,
                            PasswordConfig::MAX_COST
                        ),
                    });
                }
                cost
            }
            None => PasswordConfig::bcrypt_cost_for_env(environment),
        };

        let config = Self {
            environment,
            server: ServerConfig {
                host: vars.string_or("HOST", "127.0.0.1"),
                port: vars.parse_or("PORT", 8000)?,
                workers: vars.parse_or("SERVER_WORKERS", 4)?,
            },
            rate_limit: RateLimitConfig {
                per_second: vars.parse_or("RATE_LIMIT_PER_SECOND", 100)?,
                burst_size: vars.parse_or("RATE_LIMIT_BURST_SIZE", 200)?,
            },
            database: DatabaseConfig {
                uri: vars.string_or("MONGODB_URI", "mongodb://localhost:27017"),
                name: vars.string_or("DATABASE_NAME", "recipe_community"),
            },
            redis_url: vars.string_or("REDIS_URL", "redis://localhost:6379"),
            frontend_url,
            cors_origins,
            jwt: JwtConfig {
                secret: jwt_secret,
                expiration_hours: vars.parse_or("JWT_EXPIRATION_HOURS", 24)?,
                refresh_expiration_days: vars.parse_or("JWT_REFRESH_EXPIRATION_DAYS", 7)?,
            },
            oauth: OAuthConfig {
                state_ttl_secs: vars.parse_or("OAUTH_STATE_TTL_SECONDS", 600)?,
                http_timeout_secs: vars.parse_or("OAUTH_HTTP_TIMEOUT_SECONDS", 10)?,
                state_backend: vars.parse_or("OAUTH_STATE_BACKEND", StateBackend::Redis)?,
                secure_cookies: vars.parse_or("OAUTH_SECURE_COOKIES", false)?,
            },
            google: ProviderConfig {
                provider: AuthProvider::Google,
                client_id: vars.required("GOOGLE_CLIENT_ID")?,
                client_secret: vars.required("GOOGLE_CLIENT_SECRET")?,
                redirect_uri: vars.required("GOOGLE_REDIRECT_URI")?,
                authorize_uri: vars.string_or("GOOGLE_AUTH_URI", GOOGLE_AUTH_URI),
                token_uri: vars.string_or("GOOGLE_TOKEN_URI", GOOGLE_TOKEN_URI),
                userinfo_uri: vars.string_or("GOOGLE_USERINFO_URI", GOOGLE_USERINFO_URI),
                scope: Some(GOOGLE_SCOPE.to_string()),
            },
            naver: ProviderConfig {
                provider: AuthProvider::Naver,
                client_id: vars.required("NAVER_CLIENT_ID")?,
                client_secret: vars.required("NAVER_SECRET_KEY")?,
                redirect_uri: vars.required("NAVER_REDIRECT_URI")?,
                authorize_uri: vars.string_or("NAVER_AUTH_URI", NAVER_AUTH_URI),
                token_uri: vars.string_or("NAVER_TOKEN_URI", NAVER_TOKEN_URI),
                userinfo_uri: vars.string_or("NAVER_USERINFO_URI", NAVER_USERINFO_URI),
                scope: None,
            },
            password: PasswordConfig { bcrypt_cost },
            media: MediaConfig {
                root: PathBuf::from(vars.string_or("MEDIA_ROOT", "media")),
                public_url: vars.string_or("MEDIA_URL", "/media"),
                max_upload_bytes: vars.parse_or("MAX_UPLOAD_BYTES", 5 * 1024 * 1024)?,
            },
        };

        Ok(config)
    }
}

struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// 공백만 있는 값은 설정되지 않은 것으로 본다
    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.optional(key).ok_or(ConfigError::Missing(key))
    }

    fn string_or(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    fn parse_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.optional(key) {
            Some(value) => value.parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            }),
            None => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ENVIRONMENT", "development"),
            ("FRONTEND_URL", "http://localhost:3000/"),
            ("GOOGLE_CLIENT_ID", "google-id"),
            ("GOOGLE_CLIENT_SECRET", "google-secret"),
            ("GOOGLE_REDIRECT_URI", "http://localhost:8000/google/callback/"),
            ("NAVER_CLIENT_ID", "naver-id"),
            ("NAVER_SECRET_KEY", "naver-secret"),
            ("NAVER_REDIRECT_URI", "http://localhost:8000/accounts/naver/login/callback/"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults_applied() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.frontend_url, "http://localhost:3000");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.oauth.state_ttl_secs, 600);
        assert_eq!(config.oauth.http_timeout_secs, 10);
        assert_eq!(config.oauth.state_backend, StateBackend::Redis);
        assert_eq!(config.password.bcrypt_cost, 4);
        assert_eq!(config.jwt.secret, JwtConfig::DEVELOPMENT_SECRET);
        assert_eq!(config.google.token_uri, GOOGLE_TOKEN_URI);
        assert_eq!(config.google.scope.as_deref(), Some("email profile"));
        assert_eq!(config.naver.authorize_uri, NAVER_AUTH_URI);
        assert!(config.naver.scope.is_none());
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_string()]);
    }

    #[test]
    fn test_missing_provider_credentials_is_error() {
        let mut vars = base_vars();
        vars.remove("NAVER_SECRET_KEY");

        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("NAVER_SECRET_KEY"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut vars = base_vars();
        vars.insert("GOOGLE_CLIENT_ID", "   ");

        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("GOOGLE_CLIENT_ID"));
    }

    #[test]
    fn test_production_requires_jwt_secret() {
        let mut vars = base_vars();
        vars.insert("ENVIRONMENT", "production");

        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("JWT_SECRET"));

        vars.insert("JWT_SECRET", "prod-secret");
        let config = load(&vars).unwrap();
        assert_eq!(config.jwt.secret, "prod-secret");
        assert_eq!(config.password.bcrypt_cost, 12);
    }

    #[test]
    fn test_invalid_number_reports_key() {
        let mut vars = base_vars();
        vars.insert("OAUTH_HTTP_TIMEOUT_SECONDS", "ten");

        match load(&vars).unwrap_err() {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, "OAUTH_HTTP_TIMEOUT_SECONDS");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_bcrypt_cost_out_of_range() {
        let mut vars = base_vars();
        vars.insert("BCRYPT_COST", "31");

        assert!(matches!(
            load(&vars).unwrap_err(),
            ConfigError::Invalid { key: "BCRYPT_COST", .. }
        ));
    }

    #[test]
    fn test_endpoint_overrides_and_memory_backend() {
        let mut vars = base_vars();
        vars.insert("GOOGLE_TOKEN_URI", "http://127.0.0.1:9999/token");
        vars.insert("OAUTH_STATE_BACKEND", "memory");
        vars.insert("CORS_ALLOWED_ORIGINS", "http://a.test, http://localhost:3000");

        let config = load(&vars).unwrap();
        assert_eq!(config.google.token_uri, "http://127.0.0.1:9999/token");
        assert_eq!(config.oauth.state_backend, StateBackend::Memory);
        assert_eq!(
            config.cors_origins,
            vec!["http://a.test".to_string(), "http://localhost:3000".to_string()]
        );
    }
}
