//! 카테고리 리포지토리 (`categories`)

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::community::Category;
use crate::errors::{AppError, AppResult};
use crate::repositories::{database_error, is_duplicate_key_error};

const COLLECTION: &str = "categories";

#[derive(Clone)]
pub struct CategoryRepository {
    db: Database,
}

impl CategoryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Category> {
        self.db.collection::<Category>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("name_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(name_index)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await
            .map_err(database_error)?;

        cursor.try_collect().await.map_err(database_error)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Category>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)
    }

    pub async fn create(&self, mut category: Category) -> AppResult<Category> {
        let result = self.collection().insert_one(&category).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::ConflictError(format!("이미 존재하는 카테고리입니다: {}", category.name))
            } else {
                database_error(e)
            }
        })?;

        category.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 카테고리 ID 를 확인할 수 없습니다".to_string())
        })?);

        Ok(category)
    }
}
