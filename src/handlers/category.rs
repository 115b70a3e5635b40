use axum::extract::{Path, State};

use crate::api::{ApiJson, ApiResponse, ApiResult, Message};
use crate::database::models::category::{
    CategoryCreated, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::services::catalog_tree::CategoryNode;

use super::{parse_id, AppState};

/// POST /category
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCategoryRequest>,
) -> ApiResult<CategoryCreated> {
    let created = state.categories.create(request).await?;
    tracing::info!(category_id = created.category_id, "category created");
    Ok(ApiResponse::ok(created))
}

/// PATCH /category
pub async fn update(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpdateCategoryRequest>,
) -> ApiResult<Message> {
    let category_id = state.categories.update(request).await?;
    tracing::info!(category_id, "category updated");
    Ok(ApiResponse::ok(Message::new(format!(
        "Category updated successfully, category id = {}",
        category_id
    ))))
}

/// GET /category - the full nested catalog
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<CategoryNode>> {
    let forest = state.categories.list().await?;
    Ok(ApiResponse::ok(forest))
}

/// DELETE /category/:category_id
pub async fn delete(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResult<Message> {
    let category_id = parse_id(&category_id)?;
    state.categories.delete(category_id).await?;
    tracing::info!(category_id, "category deleted");
    Ok(ApiResponse::ok(Message::new(format!(
        "Category deleted successfully, category id = {}",
        category_id
    ))))
}
