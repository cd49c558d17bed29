//! # Domain Entities
//!
//! MongoDB 컬렉션에 저장되는 영속 객체들입니다.
//!
//! - [`users`] - 사용자 계정 (`users`)
//! - [`community`] - 게시글, 댓글, 카테고리, 식재료

pub mod community;
pub mod users;
