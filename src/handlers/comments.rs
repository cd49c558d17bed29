//! 댓글 핸들러
//!
//! - `GET|POST /posts/{post_id}/comments` - 게시글의 댓글 트리 / 작성
//! - `GET|PUT|PATCH|DELETE /comments/{id}` - 댓글 하나 (삭제 시 하위 답글 포함)
use actix_web::{delete, get, post, route, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::community::{CreateCommentRequest, UpdateCommentRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::community::CommentService;

#[get("/{post_id}/comments")]
pub async fn list_post_comments(
    comments: web::Data<CommentService>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let tree = comments.list_for_post(&path).await?;
    Ok(HttpResponse::Ok().json(tree))
}

/// `parent_id` 를 주면 같은 게시글의 댓글에 답글로 달린다.
#[post("/{post_id}/comments")]
pub async fn create_comment(
    comments: web::Data<CommentService>,
    author: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let comment = comments.create(&author, &path, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(comment))
}

#[get("/{id}")]
pub async fn get_comment(
    comments: web::Data<CommentService>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comment = comments.get(&path).await?;
    Ok(HttpResponse::Ok().json(comment))
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update_comment(
    comments: web::Data<CommentService>,
    actor: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateCommentRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let comment = comments.update(&actor, &path, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(comment))
}

#[delete("/{id}")]
pub async fn delete_comment(
    comments: web::Data<CommentService>,
    actor: AuthenticatedUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    comments.delete(&actor, &path).await?;
    Ok(HttpResponse::NoContent().finish())
}
