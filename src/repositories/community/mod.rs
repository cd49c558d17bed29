//! 커뮤니티 리포지토리
//!
//! 각 리포지토리는 컬렉션 하나를 담당하며 `create_indexes` 를 시작 시점에 호출합니다.

pub mod category_repo;
pub mod comment_repo;
pub mod ingredient_repo;
pub mod post_repo;

pub use category_repo::CategoryRepository;
pub use comment_repo::CommentRepository;
pub use ingredient_repo::IngredientRepository;
pub use post_repo::PostRepository;
