//! # Redis 클라이언트 구현
//!
//! Redis 를 백엔드로 하는 JSON 키-값 저장 클라이언트입니다.
//! 사용자 조회 캐시와 OAuth state 저장소가 이 클라이언트를 공유합니다.
//!
//! ## 연결 관리
//!
//! `ConnectionManager` 를 사용하여 하나의 멀티플렉싱 연결을 공유하고,
//! 연결이 끊어지면 다음 명령에서 자동으로 재연결합니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use serde::{de::DeserializeOwned, Serialize};

/// Redis 클라이언트 래퍼
///
/// 값은 모두 JSON 문자열로 저장됩니다.
///
/// ```rust,ignore
/// let redis = RedisClient::connect("redis://localhost:6379").await?;
/// redis.set_with_expiry("oauth_state:abc", &state, 600).await?;
/// let state: Option<OAuthState> = redis.get_del("oauth_state:abc").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// 서버에 연결하고 `PING` 으로 가용성을 확인합니다.
    pub async fn connect(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let mut manager = client.get_connection_manager().await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        Ok(Self { manager })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;
        value.map(|json| decode(&json)).transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: u64,
    ) -> Result<(), RedisError> {
        let mut conn = self.manager.clone();
        let json = encode(value)?;
        conn.set_ex(key, json, seconds).await
    }

    /// 값을 읽고 같은 명령으로 삭제합니다 (`GETDEL`).
    ///
    /// 동시에 두 요청이 같은 키를 가져가려 해도 한 쪽만 값을 받습니다.
    pub async fn get_del<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get_del(key).await?;
        value.map(|json| decode(&json)).transpose()
    }

    pub async fn del(&self, key: &str) -> Result<(), RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String, RedisError> {
    serde_json::to_string(value).map_err(|e| {
        RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string()))
    })
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, RedisError> {
    serde_json::from_str(json).map_err(|e| {
        RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string()))
    })
}
