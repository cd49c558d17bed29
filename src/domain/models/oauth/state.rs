//! OAuth `state` 값
//!
//! 로그인 시작 시 세션별로 하나 발급되어 저장되고, 콜백에서 한 번 소비됩니다.
//! 콜백의 `state` 가 저장된 값과 바이트 단위로 같아야만 다음 단계로 진행합니다.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::AuthProvider;

/// state 값에 쓰는 난수 바이트 수 (base64 인코딩 후 43자)
pub const STATE_BYTES: usize = 32;

/// 세션에 저장되는 state 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthState {
    /// URL-safe base64 (패딩 없음)
    pub value: String,
    /// 이 state 를 발급한 로그인 플로우
    pub provider: AuthProvider,
    /// 발급 시각 (unix seconds)
    pub issued_at: i64,
}

impl OAuthState {
    /// 운영체제 CSPRNG 로 새 state 를 만든다.
    ///
    /// 난수 생성기를 쓸 수 없으면 `rand` 가 패닉하며, 요청 단위로 복구하지 않는다.
    pub fn generate(provider: AuthProvider) -> Self {
        let bytes: [u8; STATE_BYTES] = rand::random();

        Self {
            value: URL_SAFE_NO_PAD.encode(bytes),
            provider,
            issued_at: Utc::now().timestamp(),
        }
    }

    pub fn is_expired(&self, ttl_secs: u64, now: i64) -> bool {
        now.saturating_sub(self.issued_at) >= ttl_secs as i64
    }

    /// 같은 프로바이더가 발급했고 값이 정확히 일치하는지 확인
    pub fn matches(&self, provider: AuthProvider, received: &str) -> bool {
        self.provider == provider && constant_time_eq(self.value.as_bytes(), received.as_bytes())
    }

    /// 로그용 지문 (SHA-256 앞 8자리). state 원문은 로그에 남기지 않는다.
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.value)
    }
}

pub fn fingerprint(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    digest.iter().take(4).map(|b| format!("{:02x}", b)).collect()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
