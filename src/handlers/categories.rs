//! 카테고리 핸들러 (`/categories`)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::community::CreateCategoryRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::community::CategoryService;

/// 이름순 전체 목록
#[get("")]
pub async fn list_categories(categories: web::Data<CategoryService>) -> AppResult<HttpResponse> {
    let list = categories.list().await?;
    Ok(HttpResponse::Ok().json(list))
}

#[post("")]
pub async fn create_category(
    categories: web::Data<CategoryService>,
    _user: AuthenticatedUser,
    payload: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let category = categories.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(category))
}
