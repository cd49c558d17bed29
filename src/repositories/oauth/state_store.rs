//! OAuth state 저장소
//!
//! 세션 ID 하나에 state 하나만 저장합니다 (새 로그인 시작은 이전 값을 덮어씀).
//! 콜백은 [`StateStore::take`] 로 값을 꺼내는 동시에 삭제하므로,
//! 같은 state 로 두 번 콜백이 와도 한 번만 통과할 수 있습니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::caching::redis::RedisClient;
use crate::domain::models::oauth::OAuthState;
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait StateStore: Send + Sync {
    /// 세션의 state 를 저장 (기존 값 덮어쓰기)
    async fn put(&self, session_id: &str, state: &OAuthState, ttl_secs: u64) -> AppResult<()>;

    /// 세션의 state 를 꺼내고 삭제. 없거나 만료되었으면 `None`.
    async fn take(&self, session_id: &str) -> AppResult<Option<OAuthState>>;
}

pub fn state_key(session_id: &str) -> String {
    format!("oauth_state:{}", session_id)
}

/// Redis 기반 저장소 (`SET EX` + `GETDEL`)
pub struct RedisStateStore {
    redis: RedisClient,
}

impl RedisStateStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl StateStore for RedisStateStore {
    async fn put(&self, session_id: &str, state: &OAuthState, ttl_secs: u64) -> AppResult<()> {
        self.redis
            .set_with_expiry(&state_key(session_id), state, ttl_secs)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn take(&self, session_id: &str) -> AppResult<Option<OAuthState>> {
        self.redis
            .get_del::<OAuthState>(&state_key(session_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}

/// 단일 프로세스용 메모리 저장소
///
/// 만료된 항목은 `put` 때 함께 정리합니다.
#[derive(Default)]
pub struct InMemoryStateStore {
    entries: Mutex<HashMap<String, (OAuthState, Instant)>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, (OAuthState, Instant)>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::InternalError("state 저장소 잠금 실패".to_string()))
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn put(&self, session_id: &str, state: &OAuthState, ttl_secs: u64) -> AppResult<()> {
        let now = Instant::now();
        let mut entries = self.lock()?;
        entries.retain(|_, (_, deadline)| *deadline > now);
        entries.insert(
            state_key(session_id),
            (state.clone(), now + Duration::from_secs(ttl_secs)),
        );
        Ok(())
    }

    async fn take(&self, session_id: &str) -> AppResult<Option<OAuthState>> {
        let entry = self.lock()?.remove(&state_key(session_id));

        Ok(entry
            .filter(|(_, deadline)| *deadline > Instant::now())
            .map(|(state, _)| state))
    }
}
