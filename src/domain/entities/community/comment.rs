//! 댓글 엔티티 (`comments` 컬렉션)
//!
//! `parent_id` 가 없으면 게시글에 바로 달린 최상위 댓글이고,
//! 있으면 같은 게시글의 다른 댓글에 대한 답글입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub post_id: ObjectId,
    pub author_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ObjectId>,
    pub content: String,
    pub creation_date: DateTime,
    pub updated_at: DateTime,
}

impl Comment {
    pub fn new(
        post_id: ObjectId,
        author_id: ObjectId,
        parent_id: Option<ObjectId>,
        content: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            post_id,
            author_id,
            parent_id,
            content,
            creation_date: now,
            updated_at: now,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}
