//! 식재료 요청/응답 DTO
//!
//! 필드는 앱의 직접 입력 화면과 같습니다: 이름, 분류, 수량, 보관 방법, 유통기한.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::dto::format_datetime;
use crate::domain::entities::community::Ingredient;

pub const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateIngredientRequest {
    #[validate(length(min = 1, max = 100, message = "식재료 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(max = 50, message = "분류는 50자 이하여야 합니다"))]
    pub category: Option<String>,

    #[validate(range(min = 0, max = 100000, message = "수량은 0 이상이어야 합니다"))]
    #[serde(default = "default_quantity")]
    pub quantity: i32,

    #[validate(length(max = 50, message = "보관 방법은 50자 이하여야 합니다"))]
    pub storage_condition: Option<String>,

    #[validate(custom(function = "validate_expiration_date"))]
    pub expiration_date: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

/// PUT/PATCH 공용 부분 수정 요청
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateIngredientRequest {
    #[validate(length(min = 1, max = 100, message = "식재료 이름은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    #[validate(length(max = 50, message = "분류는 50자 이하여야 합니다"))]
    pub category: Option<String>,

    #[validate(range(min = 0, max = 100000, message = "수량은 0 이상이어야 합니다"))]
    pub quantity: Option<i32>,

    #[validate(length(max = 50, message = "보관 방법은 50자 이하여야 합니다"))]
    pub storage_condition: Option<String>,

    #[validate(custom(function = "validate_expiration_date"))]
    pub expiration_date: Option<String>,
}

impl UpdateIngredientRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.storage_condition.is_none()
            && self.expiration_date.is_none()
    }
}

/// 유통기한 형식 검증 (`YYYY-MM-DD`, 실제 존재하는 날짜)
fn validate_expiration_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, EXPIRATION_DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("invalid_date")
                .with_message("유통기한은 YYYY-MM-DD 형식이어야 합니다".into())
        })
}

#[derive(Debug, Serialize)]
pub struct IngredientResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: ingredient.name,
            category: ingredient.category,
            quantity: ingredient.quantity,
            storage_condition: ingredient.storage_condition,
            expiration_date: ingredient.expiration_date,
            created_at: format_datetime(&ingredient.created_at),
            updated_at: format_datetime(&ingredient.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(expiration_date: Option<&str>, quantity: i32) -> CreateIngredientRequest {
        CreateIngredientRequest {
            name: "양파".to_string(),
            category: Some("채소".to_string()),
            quantity,
            storage_condition: Some("냉장".to_string()),
            expiration_date: expiration_date.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_ingredient() {
        assert!(request(Some("2024-02-29"), 3).validate().is_ok());
        assert!(request(None, 0).validate().is_ok());
    }

    #[test]
    fn test_rejects_impossible_date() {
        let errors = request(Some("2023-02-30"), 1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("expiration_date"));
    }

    #[test]
    fn test_rejects_wrong_date_format() {
        assert!(request(Some("30/01/2024"), 1).validate().is_err());
    }

    #[test]
    fn test_rejects_negative_quantity() {
        let errors = request(None, -1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let parsed: CreateIngredientRequest = serde_json::from_str(r#"{"name":"계란"}"#).unwrap();
        assert_eq!(parsed.quantity, 1);
    }
}
