//! 커뮤니티 엔티티 모듈
//!
//! 레시피 게시글, 스레드형 댓글, 카테고리, 사용자별 식재료를 정의합니다.

pub mod category;
pub mod comment;
pub mod ingredient;
pub mod post;

pub use category::Category;
pub use comment::Comment;
pub use ingredient::Ingredient;
pub use post::Post;
