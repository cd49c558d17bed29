//! 레시피 게시글 서비스
//!
//! 읽기는 누구나, 작성은 로그인 사용자, 수정/삭제는 작성자(또는 admin)만 가능합니다.
//! 게시글을 지우면 달린 댓글도 함께 지웁니다.

use mongodb::bson::{oid::ObjectId, DateTime, Document};

use crate::domain::dto::community::{
    CreatePostRequest, PageQuery, PagedResponse, PostResponse, UpdatePostRequest,
};
use crate::domain::entities::community::Post;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::community::{CategoryRepository, CommentRepository, PostRepository};
use crate::repositories::parse_object_id;

#[derive(Clone)]
pub struct PostService {
    posts: PostRepository,
    comments: CommentRepository,
    categories: CategoryRepository,
}

impl PostService {
    pub fn new(
        posts: PostRepository,
        comments: CommentRepository,
        categories: CategoryRepository,
    ) -> Self {
        Self {
            posts,
            comments,
            categories,
        }
    }

    pub async fn list(&self, query: &PageQuery) -> AppResult<PagedResponse<PostResponse>> {
        let (page, page_size) = query.normalized();

        let items = self.posts.list(query.skip(), page_size).await?;
        let total = self.posts.count().await?;

        Ok(PagedResponse {
            items: items.into_iter().map(PostResponse::from).collect(),
            page,
            page_size,
            total,
        })
    }

    pub async fn get(&self, id: &str) -> AppResult<PostResponse> {
        let post = self.find(&parse_object_id(id)?).await?;
        Ok(PostResponse::from(post))
    }

    pub async fn create(
        &self,
        author: &AuthenticatedUser,
        request: CreatePostRequest,
    ) -> AppResult<PostResponse> {
        let category_id = self.resolve_category(request.category_id.as_deref()).await?;

        let post = Post::new(
            author.object_id()?,
            request.title,
            request.content,
            category_id,
            request.image_url,
        );
        let created = self.posts.create(post).await?;

        log::info!("게시글 작성: author={}, title={}", author.user_id, created.title);
        Ok(PostResponse::from(created))
    }

    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        request: UpdatePostRequest,
    ) -> AppResult<PostResponse> {
        let id = parse_object_id(id)?;
        let post = self.find(&id).await?;
        actor.ensure_can_modify(&post.author_id)?;

        if request.is_empty() {
            return Ok(PostResponse::from(post));
        }

        let mut changes = Document::new();
        if let Some(title) = request.title {
            changes.insert("title", title);
        }
        if let Some(content) = request.content {
            changes.insert("content", content);
        }
        if let Some(category_id) = self.resolve_category(request.category_id.as_deref()).await? {
            changes.insert("category_id", category_id);
        }
        if let Some(image_url) = request.image_url {
            changes.insert("image_url", image_url);
        }
        changes.insert("updated_at", DateTime::now());

        let updated = self
            .posts
            .update(&id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))?;

        Ok(PostResponse::from(updated))
    }

    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let post = self.find(&id).await?;
        actor.ensure_can_modify(&post.author_id)?;

        if !self.posts.delete(&id).await? {
            return Err(AppError::NotFound("게시글을 찾을 수 없습니다".to_string()));
        }
        let removed_comments = self.comments.delete_for_post(&id).await?;

        log::info!("게시글 삭제: id={}, 댓글 {}개 함께 삭제", id, removed_comments);
        Ok(())
    }

    async fn find(&self, id: &ObjectId) -> AppResult<Post> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))
    }

    /// 카테고리 ID 가 주어졌으면 실제로 있는지 확인
    async fn resolve_category(&self, category_id: Option<&str>) -> AppResult<Option<ObjectId>> {
        let Some(raw) = category_id.filter(|raw| !raw.is_empty()) else {
            return Ok(None);
        };

        let id = parse_object_id(raw)?;
        if self.categories.find_by_id(&id).await?.is_none() {
            return Err(AppError::ValidationError(format!(
                "존재하지 않는 카테고리입니다: {}",
                raw
            )));
        }

        Ok(Some(id))
    }
}

