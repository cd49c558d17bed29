//! 댓글 요청/응답 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::format_datetime;
use crate::domain::entities::community::Comment;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "댓글은 1-1000자 사이여야 합니다"))]
    pub content: String,

    /// 답글을 달 댓글 ID (같은 게시글의 댓글이어야 함)
    pub parent_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "댓글은 1-1000자 사이여야 합니다"))]
    pub content: String,
}

/// 답글이 중첩된 댓글 응답
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub content: String,
    pub creation_date: String,
    pub updated_at: String,
    pub replies: Vec<CommentResponse>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.map(|id| id.to_hex()).unwrap_or_default(),
            post_id: comment.post_id.to_hex(),
            author_id: comment.author_id.to_hex(),
            parent_id: comment.parent_id.map(|id| id.to_hex()),
            content: comment.content,
            creation_date: format_datetime(&comment.creation_date),
            updated_at: format_datetime(&comment.updated_at),
            replies: Vec::new(),
        }
    }
}
