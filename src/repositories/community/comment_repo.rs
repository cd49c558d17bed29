//! 댓글 리포지토리 (`comments`)

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::community::Comment;
use crate::errors::{AppError, AppResult};
use crate::repositories::database_error;

const COLLECTION: &str = "comments";

#[derive(Clone)]
pub struct CommentRepository {
    db: Database,
}

impl CommentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Comment> {
        self.db.collection::<Comment>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let post_index = IndexModel::builder()
            .keys(doc! { "post_id": 1, "creation_date": 1 })
            .options(
                IndexOptions::builder()
                    .name("post_creation_date".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(post_index)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    /// 게시글의 모든 댓글 (오래된 순)
    pub async fn list_for_post(&self, post_id: &ObjectId) -> AppResult<Vec<Comment>> {
        let cursor = self
            .collection()
            .find(doc! { "post_id": post_id })
            .sort(doc! { "creation_date": 1, "_id": 1 })
            .await
            .map_err(database_error)?;

        cursor.try_collect().await.map_err(database_error)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Comment>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)
    }

    pub async fn create(&self, mut comment: Comment) -> AppResult<Comment> {
        let result = self
            .collection()
            .insert_one(&comment)
            .await
            .map_err(database_error)?;

        comment.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 댓글 ID 를 확인할 수 없습니다".to_string())
        })?);

        Ok(comment)
    }

    pub async fn update_content(&self, id: &ObjectId, content: &str) -> AppResult<Option<Comment>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "content": content, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(database_error)
    }

    pub async fn delete_many(&self, ids: &[ObjectId]) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = self
            .collection()
            .delete_many(doc! { "_id": { "$in": ids } })
            .await
            .map_err(database_error)?;

        Ok(result.deleted_count)
    }

    pub async fn delete_for_post(&self, post_id: &ObjectId) -> AppResult<u64> {
        let result = self
            .collection()
            .delete_many(doc! { "post_id": post_id })
            .await
            .map_err(database_error)?;

        Ok(result.deleted_count)
    }
}
