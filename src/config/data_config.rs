//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 업로드 저장소 관련 설정을 관리합니다.
//! 모든 값은 [`AppConfig::from_lookup`](super::AppConfig::from_lookup) 에서 한 번만 읽힙니다.

use std::path::PathBuf;
use std::str::FromStr;

/// 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    /// 알 수 없는 값은 가장 보수적인 `Production` 으로 취급합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        })
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정 (actix-governor)
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

/// 비밀번호 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// `BCRYPT_COST` 가 없을 때 환경별 기본 비용
    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 업로드 파일 저장 설정
///
/// 파일은 `{root}/uploads/` 아래에 저장되고 `{public_url}/uploads/{file}` 로 노출됩니다.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub root: PathBuf,
    pub public_url: String,
    pub max_upload_bytes: usize,
}

impl MediaConfig {
    pub fn upload_dir(&self) -> PathBuf {
        self.root.join("uploads")
    }

    pub fn public_path(&self, file_name: &str) -> String {
        format!("{}/uploads/{}", self.public_url.trim_end_matches('/'), file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("unknown".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Production), 12);
    }

    #[test]
    fn test_media_public_path_trims_slash() {
        let media = MediaConfig {
            root: PathBuf::from("media"),
            public_url: "/media/".to_string(),
            max_upload_bytes: 1024,
        };

        assert_eq!(media.public_path("a.png"), "/media/uploads/a.png");
        assert_eq!(media.upload_dir(), PathBuf::from("media").join("uploads"));
    }
}
