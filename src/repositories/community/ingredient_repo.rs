//! 식재료 리포지토리 (`ingredients`)

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::community::Ingredient;
use crate::errors::{AppError, AppResult};
use crate::repositories::database_error;

const COLLECTION: &str = "ingredients";

#[derive(Clone)]
pub struct IngredientRepository {
    db: Database,
}

impl IngredientRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Ingredient> {
        self.db.collection::<Ingredient>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "expiration_date": 1 })
            .options(
                IndexOptions::builder()
                    .name("owner_expiration_date".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(owner_index)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    /// 소유자의 식재료 (유통기한 임박 순, 기한 없는 항목은 앞쪽)
    pub async fn list_for_owner(&self, owner_id: &ObjectId) -> AppResult<Vec<Ingredient>> {
        let cursor = self
            .collection()
            .find(doc! { "owner_id": owner_id })
            .sort(doc! { "expiration_date": 1, "created_at": 1 })
            .await
            .map_err(database_error)?;

        cursor.try_collect().await.map_err(database_error)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Ingredient>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)
    }

    pub async fn create(&self, mut ingredient: Ingredient) -> AppResult<Ingredient> {
        let result = self
            .collection()
            .insert_one(&ingredient)
            .await
            .map_err(database_error)?;

        ingredient.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 식재료 ID 를 확인할 수 없습니다".to_string())
        })?);

        Ok(ingredient)
    }

    pub async fn update(&self, id: &ObjectId, changes: Document) -> AppResult<Option<Ingredient>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": changes })
            .with_options(options)
            .await
            .map_err(database_error)
    }

    pub async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(database_error)?;

        Ok(result.deleted_count > 0)
    }
}
