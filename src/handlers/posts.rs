//! 레시피 게시글 핸들러 (`/posts`)
//!
//! 읽기는 익명으로 가능하고, 쓰기 핸들러는 [`AuthenticatedUser`] 를 받아 토큰 없는 요청을 401 로 거절합니다.
use actix_web::{delete, get, post, route, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::community::{CreatePostRequest, PageQuery, UpdatePostRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::community::PostService;

/// 최신순 목록
///
/// # Endpoint
/// `GET /posts?page=1&page_size=20`
#[get("")]
pub async fn list_posts(
    posts: web::Data<PostService>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = posts.list(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

#[post("")]
pub async fn create_post(
    posts: web::Data<PostService>,
    author: AuthenticatedUser,
    payload: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let post = posts.create(&author, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(post))
}

#[get("/{id}")]
pub async fn get_post(
    posts: web::Data<PostService>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = posts.get(&path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// 부분 수정 (PUT, PATCH 동일)
#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update_post(
    posts: web::Data<PostService>,
    actor: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let post = posts.update(&actor, &path, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// 게시글과 달린 댓글 전체 삭제
#[delete("/{id}")]
pub async fn delete_post(
    posts: web::Data<PostService>,
    actor: AuthenticatedUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    posts.delete(&actor, &path).await?;
    Ok(HttpResponse::NoContent().finish())
}
