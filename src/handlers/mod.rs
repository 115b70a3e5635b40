pub mod category;
pub mod product;
pub mod variant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::api::ApiResponse;
use crate::database::category_store::PgCategoryStore;
use crate::database::product_store::PgProductStore;
use crate::database::variant_store::PgVariantStore;
use crate::error::{ApiError, INVALID_PARAMETER};
use crate::services::category_service::CategoryService;
use crate::services::product_service::ProductService;
use crate::services::variant_service::VariantService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub categories: CategoryService<PgCategoryStore>,
    pub products: ProductService<PgProductStore>,
    pub variants: VariantService<PgVariantStore>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            categories: CategoryService::new(PgCategoryStore::new(pool.clone())),
            products: ProductService::new(PgProductStore::new(pool.clone())),
            variants: VariantService::new(PgVariantStore::new(pool.clone())),
            pool,
        }
    }
}

/// Numeric id path segment; anything else is a client error.
pub(crate) fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::Validation(format!("{}: {} is not a valid id", INVALID_PARAMETER, raw)))
}

/// GET / - service index
pub async fn root() -> ApiResponse<Value> {
    ApiResponse::ok(json!({
        "name": "catalog-api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "category": "POST/PATCH/GET /category, DELETE /category/:category_id",
            "product": "POST/PATCH /product, GET/DELETE /product/:product_id",
            "variant": "POST/PATCH /variant, DELETE /variant/:variant_id, GET /product/:product_id/variant[/:variant_id]",
        }
    }))
}

/// GET /health - liveness plus a database ping
pub async fn health(State(state): State<AppState>) -> Response {
    let now = chrono::Utc::now();

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => ApiResponse::ok(json!({
            "timestamp": now,
            "database": "ok"
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "nok", "error": "database unavailable" })),
            )
                .into_response()
        }
    }
}
