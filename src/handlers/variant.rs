use axum::extract::{Path, State};

use crate::api::{ApiJson, ApiResponse, ApiResult, Message};
use crate::database::models::variant::{
    CreateVariantRequest, UpdateVariantRequest, Variant, VariantCreated,
};

use super::{parse_id, AppState};

/// POST /variant
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateVariantRequest>,
) -> ApiResult<VariantCreated> {
    let created = state.variants.create(request).await?;
    tracing::info!(variant_id = created.id, "variant created");
    Ok(ApiResponse::ok(created))
}

/// PATCH /variant
pub async fn update(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpdateVariantRequest>,
) -> ApiResult<Message> {
    let variant_id = state.variants.update(request).await?;
    tracing::info!(variant_id, "variant updated");
    Ok(ApiResponse::ok(Message::new(format!(
        "Variant updated successfully, variant id = {}",
        variant_id
    ))))
}

/// GET /product/:product_id/variant/:variant_id
pub async fn get(
    State(state): State<AppState>,
    Path((product_id, variant_id)): Path<(String, String)>,
) -> ApiResult<Variant> {
    let product_id = parse_id(&product_id)?;
    let variant_id = parse_id(&variant_id)?;
    let variant = state.variants.get(product_id, variant_id).await?;
    Ok(ApiResponse::ok(variant))
}

/// GET /product/:product_id/variant
pub async fn list(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Vec<Variant>> {
    let product_id = parse_id(&product_id)?;
    let variants = state.variants.list(product_id).await?;
    Ok(ApiResponse::ok(variants))
}

/// DELETE /variant/:variant_id
pub async fn delete(
    State(state): State<AppState>,
    Path(variant_id): Path<String>,
) -> ApiResult<Message> {
    let variant_id = parse_id(&variant_id)?;
    state.variants.delete(variant_id).await?;
    tracing::info!(variant_id, "variant deleted");
    Ok(ApiResponse::ok(Message::new(format!(
        "Variant deleted successfully, variant id = {}",
        variant_id
    ))))
}
