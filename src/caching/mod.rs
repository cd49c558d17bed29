//! 캐싱 계층 모듈
//!
//! Redis 를 백엔드로 하는 JSON 키-값 저장소를 제공합니다.
//!
//! # 사용처
//!
//! - 이메일 기준 사용자 조회 캐시 (`user:email:{email}`, 10분)
//! - OAuth state 저장 (`oauth_state:{session_id}`, `OAUTH_STATE_TTL_SECONDS`)
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
