//! 커뮤니티 서비스 모듈
//!
//! 레시피 게시글, 스레드형 댓글, 카테고리, 사용자별 식재료, 이미지 업로드를 다룹니다.
//! 소유권 검사는 [`AuthenticatedUser::ensure_can_modify`](crate::domain::models::auth::AuthenticatedUser::ensure_can_modify)
//! 로 통일합니다.

pub mod category_service;
pub mod comment_service;
pub mod ingredient_service;
pub mod post_service;
pub mod upload_service;

pub use category_service::CategoryService;
pub use comment_service::CommentService;
pub use ingredient_service::IngredientService;
pub use post_service::PostService;
pub use upload_service::UploadService;
