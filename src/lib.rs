use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod services;

pub use handlers::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Catalog API
        .merge(category_routes())
        .merge(product_routes())
        .merge(variant_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn category_routes() -> Router<AppState> {
    use axum::routing::{delete, post};
    use handlers::category;

    Router::new()
        .route(
            "/category",
            post(category::create)
                .patch(category::update)
                .get(category::list),
        )
        .route("/category/:category_id", delete(category::delete))
}

fn product_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::product;

    Router::new()
        .route("/product", post(product::create).patch(product::update))
        .route(
            "/product/:product_id",
            get(product::get).delete(product::delete),
        )
}

fn variant_routes() -> Router<AppState> {
    use axum::routing::{delete, post};
    use handlers::variant;

    Router::new()
        .route("/variant", post(variant::create).patch(variant::update))
        .route("/variant/:variant_id", delete(variant::delete))
        .route("/product/:product_id/variant", get(variant::list))
        .route(
            "/product/:product_id/variant/:variant_id",
            get(variant::get),
        )
}
