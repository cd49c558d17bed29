//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시점에 한 번 만들어져 `web::Data` 로 핸들러에 주입됩니다.
//! 모두 `Clone` 이며 내부 저장소는 `Arc` 또는 연결 풀 핸들을 공유합니다.
//!
//! - [`auth`] - OAuth 로그인 플로우, JWT 발급
//! - [`users`] - 로컬 가입/로그인, 사용자 조회
//! - [`community`] - 게시글, 댓글, 카테고리, 식재료, 업로드

pub mod auth;
pub mod community;
pub mod users;
