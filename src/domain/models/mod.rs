//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체입니다.
//!
//! ## Entities vs Models
//!
//! - **Entities** (`../entities/`): MongoDB 에 저장되고 ID 로 식별되는 객체
//! - **Models** (`./`): 요청 처리 동안만 쓰이는 값 객체 (state, 프로바이더 프로필, JWT 클레임)
//!
//! ```text
//! models/
//! ├── auth/    ← 인증된 사용자 컨텍스트, 미들웨어 모드
//! ├── oauth/   ← OAuth state, 프로바이더 응답/프로필
//! └── token/   ← JWT 클레임, 토큰 쌍
//! ```

pub mod auth;
pub mod oauth;
pub mod token;
