//! 레시피 커뮤니티 백엔드
//!
//! 레시피 공유 커뮤니티의 Actix-web 서버입니다.
//! Google/Naver 소셜 로그인과 로컬 계정, JWT 토큰 인증, 게시글과 답글 트리,
//! 사용자별 식재료, 이미지 업로드를 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← OAuth 플로우, 계정, 커뮤니티 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / StateStore trait, MongoDB 컬렉션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 전역 싱글톤 없이 `main.rs` 에서 [`config::AppConfig`] 를 한 번 읽고,
//! 서비스를 생성자 주입으로 조립한 뒤 `web::Data` 로 등록합니다.

pub mod caching;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
