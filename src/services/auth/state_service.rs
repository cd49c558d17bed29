//! OAuth state 발급과 검증
//!
//! state 는 저장이 끝난 뒤에만 호출자에게 돌려주므로, 리다이렉트에 실린
//! state 는 항상 콜백에서 찾을 수 있습니다. 콜백에서는 저장된 값을
//! 결과와 상관없이 먼저 꺼내서(삭제) 재사용을 막습니다.

use std::sync::Arc;

use chrono::Utc;

use crate::config::AuthProvider;
use crate::domain::models::oauth::state::fingerprint;
use crate::domain::models::oauth::OAuthState;
use crate::errors::{AppResult, OAuthError};
use crate::repositories::oauth::StateStore;

#[derive(Clone)]
pub struct StateService {
    store: Arc<dyn StateStore>,
    ttl_secs: u64,
}

impl StateService {
    pub fn new(store: Arc<dyn StateStore>, ttl_secs: u64) -> Self {
        Self { store, ttl_secs }
    }

    /// 새 state 를 만들어 세션에 저장한 뒤 돌려준다.
    pub async fn issue(&self, session_id: &str, provider: AuthProvider) -> AppResult<OAuthState> {
        let state = OAuthState::generate(provider);

        self.store.put(session_id, &state, self.ttl_secs).await?;

        log::debug!(
            "OAuth state 발급: provider={}, state={}",
            provider,
            state.fingerprint()
        );

        Ok(state)
    }

    /// 세션의 state 를 꺼내고 삭제한다.
    pub async fn consume(&self, session_id: &str) -> AppResult<Option<OAuthState>> {
        self.store.take(session_id).await
    }

    /// 꺼낸 state 와 콜백의 `state` 를 비교
    pub fn validate(
        &self,
        stored: Option<&OAuthState>,
        provider: AuthProvider,
        received: Option<&str>,
    ) -> Result<(), OAuthError> {
        validate_state(stored, provider, received, self.ttl_secs, Utc::now().timestamp())
    }
}

pub fn validate_state(
    stored: Option<&OAuthState>,
    provider: AuthProvider,
    received: Option<&str>,
    ttl_secs: u64,
    now: i64,
) -> Result<(), OAuthError> {
    let received = received.unwrap_or_default();

    let Some(stored) = stored else {
        log::warn!(
            "OAuth state 없음 (세션 없음 또는 만료): provider={}, received={}",
            provider,
            fingerprint(received)
        );
        return Err(OAuthError::StateMismatch);
    };

    if stored.is_expired(ttl_secs, now) {
        log::warn!("OAuth state 만료: state={}", stored.fingerprint());
        return Err(OAuthError::StateMismatch);
    }

    if !stored.matches(provider, received) {
        log::warn!(
            "OAuth state 불일치: provider={}, expected={}, received={}",
            provider,
            stored.fingerprint(),
            fingerprint(received)
        );
        return Err(OAuthError::StateMismatch);
    }

    Ok(())
}
