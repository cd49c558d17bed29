//! # Data Transfer Objects
//!
//! API 경계에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO 는 `validator` 로 검증하고, 응답 DTO 는 엔티티에서 `From` 으로 변환합니다.
//!
//! ```text
//! dto/
//! ├── users/       - 가입, 로그인, OAuth 콜백, 사용자 응답
//! └── community/   - 게시글, 댓글, 카테고리, 식재료, 업로드, 페이지네이션
//! ```

use mongodb::bson::DateTime;

pub mod community;
pub mod users;

pub use community::*;
pub use users::*;

/// 응답에 쓰는 RFC 3339 시각 문자열
pub fn format_datetime(value: &DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}
