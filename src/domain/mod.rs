//! # Domain Layer Module
//!
//! 비즈니스 객체와 API 계약을 담당하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - MongoDB 에 저장되는 엔티티 (User, Post, Comment, Category, Ingredient)
//! ├── dto        - 요청/응답 데이터 전송 객체
//! └── models     - OAuth state, 프로바이더 프로필, JWT 클레임 등 값 객체
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! 하위 모듈 이름(`users`, `community`)이 겹치므로 재export 없이
//! `domain::entities::users::User` 처럼 전체 경로로 사용합니다.

pub mod dto;
pub mod entities;
pub mod models;
