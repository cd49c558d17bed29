//! OAuth 관련 도메인 모델
//!
//! - [`state`] - CSRF 방지를 위한 세션별 state 값
//! - [`provider_profile`] - 토큰/프로필 응답과 공통 프로필 모델

pub mod provider_profile;
pub mod state;

pub use provider_profile::*;
pub use state::OAuthState;
