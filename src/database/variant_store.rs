use async_trait::async_trait;
use sqlx::PgPool;

use super::models::variant::{NewVariant, Variant, VariantChanges, VariantCreated};

#[async_trait]
pub trait VariantStore: Send + Sync {
    async fn product_exists(&self, product_id: i32) -> Result<bool, sqlx::Error>;
    async fn id_exists(&self, variant_id: i32) -> Result<bool, sqlx::Error>;
    async fn insert(&self, new: &NewVariant) -> Result<VariantCreated, sqlx::Error>;
    async fn update(
        &self,
        variant_id: i32,
        changes: &VariantChanges,
    ) -> Result<u64, sqlx::Error>;
    async fn soft_delete(&self, variant_id: i32) -> Result<u64, sqlx::Error>;
    /// Live variants of a product, optionally narrowed to a single variant.
    async fn live_variants(
        &self,
        product_id: i32,
        variant_id: Option<i32>,
    ) -> Result<Vec<Variant>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgVariantStore {
    pool: PgPool,
}

impl PgVariantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VariantStore for PgVariantStore {
    async fn product_exists(&self, product_id: i32) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM tbl_product WHERE product_id = $1 AND deleted_at IS NULL",
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn id_exists(&self, variant_id: i32) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM tbl_variant WHERE variant_id = $1 AND deleted_at IS NULL",
        )
        .bind(variant_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn insert(&self, new: &NewVariant) -> Result<VariantCreated, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO tbl_variant
                 (name, max_retail_price, discount_price, size, color, product_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
             RETURNING variant_id AS id, name, max_retail_price, discount_price, size, color, product_id",
        )
        .bind(new.name.as_deref())
        .bind(new.max_retail_price)
        .bind(new.discount_price)
        .bind(new.size.as_deref())
        .bind(new.color.as_deref())
        .bind(new.product_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(
        &self,
        variant_id: i32,
        changes: &VariantChanges,
    ) -> Result<u64, sqlx::Error> {
        let mut query = sqlx::QueryBuilder::new("UPDATE tbl_variant SET ");
        let mut sets = query.separated(", ");
        if let Some(name) = changes.name.as_deref() {
            sets.push("name = ").push_bind_unseparated(name);
        }
        if let Some(max_retail_price) = changes.max_retail_price {
            sets.push("max_retail_price = ")
                .push_bind_unseparated(max_retail_price);
        }
        if let Some(discount_price) = changes.discount_price {
            sets.push("discount_price = ")
                .push_bind_unseparated(discount_price);
        }
        if let Some(size) = changes.size.as_deref() {
            sets.push("size = ").push_bind_unseparated(size);
        }
        if let Some(color) = changes.color.as_deref() {
            sets.push("color = ").push_bind_unseparated(color);
        }
        sets.push("updated_at = NOW()");
        query
            .push(" WHERE variant_id = ")
            .push_bind(variant_id)
            .push(" AND deleted_at IS NULL");

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn soft_delete(&self, variant_id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tbl_variant SET deleted_at = NOW()
             WHERE variant_id = $1 AND deleted_at IS NULL",
        )
        .bind(variant_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn live_variants(
        &self,
        product_id: i32,
        variant_id: Option<i32>,
    ) -> Result<Vec<Variant>, sqlx::Error> {
        let mut query = sqlx::QueryBuilder::new(
            "SELECT variant_id, name, max_retail_price, discount_price, size, color
             FROM tbl_variant WHERE product_id = ",
        );
        query.push_bind(product_id);
        if let Some(variant_id) = variant_id {
            query.push(" AND variant_id = ").push_bind(variant_id);
        }
        query.push(" AND deleted_at IS NULL ORDER BY variant_id ASC");

        query.build_query_as::<Variant>().fetch_all(&self.pool).await
    }
}
