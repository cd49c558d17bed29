//! 사용자별 식재료 엔티티 (`ingredients` 컬렉션)
//!
//! 냉장고 관리 화면에서 직접 입력한 식재료입니다.
//! 소유자 본인만 조회/수정/삭제할 수 있습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub owner_id: ObjectId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: i32,
    /// 예: "냉장", "냉동", "실온"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_condition: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Ingredient {
    pub fn new(
        owner_id: ObjectId,
        name: String,
        category: Option<String>,
        quantity: i32,
        storage_condition: Option<String>,
        expiration_date: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            owner_id,
            name,
            category,
            quantity,
            storage_condition,
            expiration_date,
            created_at: now,
            updated_at: now,
        }
    }
}
