//! 게시글 리포지토리 (`posts`)

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::community::Post;
use crate::errors::{AppError, AppResult};
use crate::repositories::database_error;

const COLLECTION: &str = "posts";

#[derive(Clone)]
pub struct PostRepository {
    db: Database,
}

impl PostRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Post> {
        self.db.collection::<Post>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let creation_date_index = IndexModel::builder()
            .keys(doc! { "creation_date": -1 })
            .options(
                IndexOptions::builder()
                    .name("creation_date_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(creation_date_index)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    /// 최신순 페이지 조회
    pub async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<Post>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "creation_date": -1, "_id": -1 })
            .skip(skip)
            .limit(limit as i64)
            .await
            .map_err(database_error)?;

        cursor.try_collect().await.map_err(database_error)
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(database_error)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)
    }

    pub async fn create(&self, mut post: Post) -> AppResult<Post> {
        let result = self
            .collection()
            .insert_one(&post)
            .await
            .map_err(database_error)?;

        post.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 게시글 ID 를 확인할 수 없습니다".to_string())
        })?);

        Ok(post)
    }

    /// `$set` 부분 수정 후 수정된 문서를 반환
    pub async fn update(&self, id: &ObjectId, changes: Document) -> AppResult<Option<Post>> {
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
