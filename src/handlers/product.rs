use axum::extract::{Path, State};

use crate::api::{ApiJson, ApiResponse, ApiResult, Message};
use crate::database::models::product::{
    CreateProductRequest, Product, ProductCreated, UpdateProductRequest,
};

use super::{parse_id, AppState};

/// POST /product
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateProductRequest>,
) -> ApiResult<ProductCreated> {
    let created = state.products.create(request).await?;
    tracing::info!(product_id = created.id, "product created");
    Ok(ApiResponse::ok(created))
}

/// PATCH /product
pub async fn update(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpdateProductRequest>,
) -> ApiResult<Message> {
    let product_id = state.products.update(request).await?;
    tracing::info!(product_id, "product updated");
    Ok(ApiResponse::ok(Message::new(format!(
        "Product updated successfully, product id = {}",
        product_id
    ))))
}

/// GET /product/:product_id
pub async fn get(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Product> {
    let product_id = parse_id(&product_id)?;
    let product = state.products.get(product_id).await?;
    Ok(ApiResponse::ok(product))
}

/// DELETE /product/:product_id - cascades to the product's variants
pub async fn delete(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Message> {
    let product_id = parse_id(&product_id)?;
    state.products.delete(product_id).await?;
    tracing::info!(product_id, "product deleted");
    Ok(ApiResponse::ok(Message::new(format!(
        "Product deleted successfully, product id = {}",
        product_id
    ))))
}
