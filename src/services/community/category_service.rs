//! 레시피 카테고리 서비스

use crate::domain::dto::community::{CategoryResponse, CreateCategoryRequest};
use crate::domain::entities::community::Category;
use crate::errors::AppResult;
use crate::repositories::community::CategoryRepository;

#[derive(Clone)]
pub struct CategoryService {
    categories: CategoryRepository,
}

impl CategoryService {
    pub fn new(categories: CategoryRepository) -> Self {
        Self { categories }
    }

    pub async fn list(&self) -> AppResult<Vec<CategoryResponse>> {
        let categories = self.categories.list().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// 이름이 겹치면 409
    pub async fn create(&self, request: CreateCategoryRequest) -> AppResult<CategoryResponse> {
        let category = self
            .categories
            .create(Category::new(request.name.trim().to_string()))
            .await?;

        log::info!("카테고리 생성: {}", category.name);
        Ok(CategoryResponse::from(category))
    }
}
