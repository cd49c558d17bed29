//! 커뮤니티 API DTO

pub mod category_dto;
pub mod comment_dto;
pub mod ingredient_dto;
pub mod pagination;
pub mod post_dto;
pub mod upload_dto;

pub use category_dto::*;
pub use comment_dto::*;
pub use ingredient_dto::*;
pub use pagination::*;
pub use post_dto::*;
pub use upload_dto::*;
