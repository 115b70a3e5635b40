use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A live category row as fetched for the listing path.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub parent_category_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub parent_id: Option<i32>,
}

/// Partial update. An absent field is left untouched; a supplied field is
/// written even when it carries a zero/empty value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryRequest {
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryCreated {
    pub category_id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}
