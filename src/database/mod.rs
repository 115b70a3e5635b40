pub mod category_store;
pub mod models;
pub mod product_store;
pub mod variant_store;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;

/// Build the shared connection pool. Connections are established lazily so
/// the server can come up and report degraded health while the database is
/// unreachable.
pub fn connect_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(&config.database_url)
}
