use async_trait::async_trait;
use sqlx::PgPool;

use super::models::category::{Category, CategoryCreated};
use super::models::product::ProductVariantRow;

/// Persistence seam for categories. Raw storage failures surface as
/// `sqlx::Error`; the service layer owns the translation into API errors.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn name_exists(&self, name: &str) -> Result<bool, sqlx::Error>;
    async fn id_exists(&self, category_id: i32) -> Result<bool, sqlx::Error>;
    async fn insert(
        &self,
        name: &str,
        parent_id: Option<i32>,
    ) -> Result<CategoryCreated, sqlx::Error>;
    async fn update(
        &self,
        category_id: i32,
        name: Option<&str>,
        parent_id: Option<i32>,
    ) -> Result<u64, sqlx::Error>;
    async fn has_subcategories(&self, category_id: i32) -> Result<bool, sqlx::Error>;
    async fn has_products(&self, category_id: i32) -> Result<bool, sqlx::Error>;
    async fn soft_delete(&self, category_id: i32) -> Result<u64, sqlx::Error>;
    async fn live_categories(&self) -> Result<Vec<Category>, sqlx::Error>;
    async fn product_rows_for_categories(
        &self,
        category_ids: &[i32],
    ) -> Result<Vec<ProductVariantRow>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn name_exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM tbl_category WHERE name = $1 AND deleted_at IS NULL",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn id_exists(&self, category_id: i32) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM tbl_category WHERE category_id = $1 AND deleted_at IS NULL",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn insert(
        &self,
        name: &str,
        parent_id: Option<i32>,
    ) -> Result<CategoryCreated, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO tbl_category (name, parent_category_id, created_at, updated_at)
             VALUES ($1, $2, NOW(), NOW())
             RETURNING category_id, name, parent_category_id AS parent_id",
        )
        .bind(name)
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(
        &self,
        category_id: i32,
        name: Option<&str>,
        parent_id: Option<i32>,
    ) -> Result<u64, sqlx::Error> {
        let mut query = sqlx::QueryBuilder::new("UPDATE tbl_category SET ");
        let mut sets = query.separated(", ");
        if let Some(name) = name {
            sets.push("name = ").push_bind_unseparated(name);
        }
        if let Some(parent_id) = parent_id {
            sets.push("parent_category_id = ")
                .push_bind_unseparated(parent_id);
        }
        sets.push("updated_at = NOW()");
        query
            .push(" WHERE category_id = ")
            .push_bind(category_id)
            .push(" AND deleted_at IS NULL");

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn has_subcategories(&self, category_id: i32) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM tbl_category
             WHERE parent_category_id = $1 AND deleted_at IS NULL",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn has_products(&self, category_id: i32) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM tbl_product WHERE category_id = $1 AND deleted_at IS NULL",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn soft_delete(&self, category_id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tbl_category SET deleted_at = NOW()
             WHERE category_id = $1 AND deleted_at IS NULL",
        )
        .bind(category_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn live_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as(
            "SELECT category_id, name, parent_category_id
             FROM tbl_category
             WHERE deleted_at IS NULL
             ORDER BY category_id ASC",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn product_rows_for_categories(
        &self,
        category_ids: &[i32],
    ) -> Result<Vec<ProductVariantRow>, sqlx::Error> {
        // The live-variant filter sits in the join condition so a product
        // without variants still yields one row (with NULL variant columns).
        sqlx::query_as(
            "SELECT
                 p.product_id, p.name AS product_name, p.description, p.image_url, p.category_id,
                 v.variant_id, v.name AS variant_name, v.max_retail_price, v.discount_price,
                 v.size, v.color
             FROM tbl_product p
             LEFT JOIN tbl_variant v
                 ON p.product_id = v.product_id AND v.deleted_at IS NULL
             WHERE p.category_id = ANY($1) AND p.deleted_at IS NULL
             ORDER BY p.product_id ASC, v.variant_id ASC",
        )
        .bind(category_ids)
        .fetch_all(&self.pool)
        .await
    }
}
