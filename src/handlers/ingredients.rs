//! 내 식재료 핸들러 (`/ingredients`)
//!
//! 라우트 전체가 인증 필수이며, 다른 사용자의 식재료에는 403 을 돌려줍니다.
use actix_web::{delete, get, post, route, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::community::{CreateIngredientRequest, UpdateIngredientRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::community::IngredientService;

/// 유통기한이 가까운 순
#[get("")]
pub async fn list_ingredients(
    ingredients: web::Data<IngredientService>,
    owner: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let list = ingredients.list(&owner).await?;
    Ok(HttpResponse::Ok().json(list))
}

#[post("")]
pub async fn create_ingredient(
    ingredients: web::Data<IngredientService>,
    owner: AuthenticatedUser,
    payload: web::Json<CreateIngredientRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ingredient = ingredients.create(&owner, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(ingredient))
}

#[get("/{id}")]
pub async fn get_ingredient(
    ingredients: web::Data<IngredientService>,
    owner: AuthenticatedUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let ingredient = ingredients.get(&owner, &path).await?;
    Ok(HttpResponse::Ok().json(ingredient))
}

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update_ingredient(
    ingredients: web::Data<IngredientService>,
    owner: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateIngredientRequest>,
) -> AppResult<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ingredient = ingredients.update(&owner, &path, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ingredient))
}

#[delete("/{id}")]
pub async fn delete_ingredient(
    ingredients: web::Data<IngredientService>,
    owner: AuthenticatedUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    ingredients.delete(&owner, &path).await?;
    Ok(HttpResponse::NoContent().finish())
}
