//! 게시글 요청/응답 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::format_datetime;
use crate::domain::entities::community::Post;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[validate(length(min = 1, max = 20000, message = "내용을 입력해주세요"))]
    pub content: String,

    pub category_id: Option<String>,

    #[validate(length(max = 500, message = "이미지 URL 이 너무 깁니다"))]
    pub image_url: Option<String>,
}

/// PUT/PATCH 공용 부분 수정 요청 (보낸 필드만 변경)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 20000, message = "내용을 입력해주세요"))]
    pub content: Option<String>,

    pub category_id: Option<String>,

    #[validate(length(max = 500, message = "이미지 URL 이 너무 깁니다"))]
    pub image_url: Option<String>,
}

impl UpdatePostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category_id.is_none()
            && self.image_url.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub creation_date: String,
    pub updated_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            author_id: post.author_id.to_hex(),
            title: post.title,
            content: post.content,
            category_id: post.category_id.map(|id| id.to_hex()),
            image_url: post.image_url,
            creation_date: format_datetime(&post.creation_date),
            updated_at: format_datetime(&post.updated_at),
        }
    }
}
