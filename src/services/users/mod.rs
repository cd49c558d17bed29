//! 사용자 관리 서비스 모듈
//!
//! 로컬 가입/로그인과 사용자 조회를 제공합니다. OAuth 계정 연결은
//! [`crate::services::auth::AccountResolver`] 가 담당합니다.

pub mod user_service;

pub use user_service::UserService;
