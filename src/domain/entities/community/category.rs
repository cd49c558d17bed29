//! 레시피 카테고리 엔티티 (`categories` 컬렉션, `name` 유니크)

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub created_at: DateTime,
}

impl Category {
    pub fn new(name: String) -> Self {
        Self {
            id: None,
            name,
            created_at: DateTime::now(),
        }
    }
}
