//! 사용자별 식재료 서비스
//!
//! 모든 작업은 로그인이 필요하며 소유자 본인만 접근할 수 있습니다.

use mongodb::bson::{oid::ObjectId, DateTime, Document};

use crate::domain::dto::community::{
    CreateIngredientRequest, IngredientResponse, UpdateIngredientRequest,
};
use crate::domain::entities::community::Ingredient;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::community::IngredientRepository;
use crate::repositories::parse_object_id;

#[derive(Clone)]
pub struct IngredientService {
    ingredients: IngredientRepository,
}

impl IngredientService {
    pub fn new(ingredients: IngredientRepository) -> Self {
        Self { ingredients }
    }

    pub async fn list(&self, owner: &AuthenticatedUser) -> AppResult<Vec<IngredientResponse>> {
        let ingredients = self.ingredients.list_for_owner(&owner.object_id()?).await?;
        Ok(ingredients.into_iter().map(IngredientResponse::from).collect())
    }

    pub async fn create(
        &self,
        owner: &AuthenticatedUser,
        request: CreateIngredientRequest,
    ) -> AppResult<IngredientResponse> {
        let ingredient = Ingredient::new(
            owner.object_id()?,
            request.name,
            request.category,
            request.quantity,
            request.storage_condition,
            request.expiration_date,
        );

        let created = self.ingredients.create(ingredient).await?;
        Ok(IngredientResponse::from(created))
    }

    pub async fn get(&self, owner: &AuthenticatedUser, id: &str) -> AppResult<IngredientResponse> {
        let ingredient = self.find_owned(owner, &parse_object_id(id)?).await?;
        Ok(IngredientResponse::from(ingredient))
    }

    pub async fn update(
        &self,
        owner: &AuthenticatedUser,
        id: &str,
        request: UpdateIngredientRequest,
    ) -> AppResult<IngredientResponse> {
        let id = parse_object_id(id)?;
        let ingredient = self.find_owned(owner, &id).await?;

        if request.is_empty() {
            return Ok(IngredientResponse::from(ingredient));
        }

        let mut changes = Document::new();
        if let Some(name) = request.name {
            changes.insert("name", name);
        }
        if let Some(category) = request.category {
            changes.insert("category", category);
        }
        if let Some(quantity) = request.quantity {
            changes.insert("quantity", quantity);
        }
        if let Some(storage_condition) = request.storage_condition {
            changes.insert("storage_condition", storage_condition);
        }
        if let Some(expiration_date) = request.expiration_date {
            changes.insert("expiration_date", expiration_date);
        }
        changes.insert("updated_at", DateTime::now());

        let updated = self
            .ingredients
            .update(&id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("식재료를 찾을 수 없습니다".to_string()))?;

        Ok(IngredientResponse::from(updated))
    }

    pub async fn delete(&self, owner: &AuthenticatedUser, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;
        self.find_owned(owner, &id).await?;

        if !self.ingredients.delete(&id).await? {
            return Err(AppError::NotFound("식재료를 찾을 수 없습니다".to_string()));
        }
        Ok(())
    }

    async fn find_owned(&self, owner: &AuthenticatedUser, id: &ObjectId) -> AppResult<Ingredient> {
        let ingredient = self
            .ingredients
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("식재료를 찾을 수 없습니다".to_string()))?;

        owner.ensure_can_modify(&ingredient.owner_id)?;
        Ok(ingredient)
    }
}
