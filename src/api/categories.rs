//! Category Endpoints

use serde::Serialize;

use super::{get_json, post_json, ApiResult};
use crate::models::{Category, CategoryOption};

#[derive(Serialize)]
pub struct CreateCategoryArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// `GET /api/categories` - full rows for the manager screen
pub async fn list_categories() -> ApiResult<Vec<Category>> {
    get_json("/api/categories").await
}

/// `GET /api/category-options` - lightweight entries for form selects
pub async fn category_options() -> ApiResult<Vec<CategoryOption>> {
    get_json("/api/category-options").await
}

/// `POST /api/categories`
pub async fn create_category(args: &CreateCategoryArgs<'_>) -> ApiResult<Category> {
    post_json("/api/categories", args).await
}
