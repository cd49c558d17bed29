//! 레시피 게시글 엔티티 (`posts` 컬렉션)

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub author_id: ObjectId,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<ObjectId>,
    /// `/upload` 로 올린 이미지의 공개 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 목록 정렬 기준 (최신순)
    pub creation_date: DateTime,
    pub updated_at: DateTime,
}

impl Post {
    pub fn new(
        author_id: ObjectId,
        title: String,
        content: String,
        category_id: Option<ObjectId>,
        image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            author_id,
            title,
            content,
            category_id,
            image_url,
            creation_date: now,
            updated_at: now,
        }
    }
}
