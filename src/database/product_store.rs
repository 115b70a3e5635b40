use async_trait::async_trait;
use sqlx::PgPool;

use super::models::product::{ProductCreated, ProductVariantRow};

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn category_exists(&self, category_id: i32) -> Result<bool, sqlx::Error>;
    async fn name_exists(&self, name: &str) -> Result<bool, sqlx::Error>;
    async fn id_exists(&self, product_id: i32) -> Result<bool, sqlx::Error>;
    async fn insert(
        &self,
        name: &str,
        description: Option<&str>,
        image_url: Option<&str>,
        category_id: i32,
    ) -> Result<ProductCreated, sqlx::Error>;
    async fn update(
        &self,
        product_id: i32,
        name: Option<&str>,
        description: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<u64, sqlx::Error>;
    /// Soft-delete the product and all of its live variants as one atomic
    /// operation. Returns the number of product rows affected (0 when the
    /// product was already gone).
    async fn soft_delete_with_variants(&self, product_id: i32) -> Result<u64, sqlx::Error>;
    async fn product_rows(&self, product_id: i32) -> Result<Vec<ProductVariantRow>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn category_exists(&self, category_id: i32) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM tbl_category WHERE category_id = $1 AND deleted_at IS NULL",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn name_exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM tbl_product WHERE name = $1 AND deleted_at IS NULL",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn id_exists(&self, product_id: i32) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM tbl_product WHERE product_id = $1 AND deleted_at IS NULL",
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn insert(
        &self,
        name: &str,
        description: Option<&str>,
        image_url: Option<&str>,
        category_id: i32,
    ) -> Result<ProductCreated, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO tbl_product (name, description, image_url, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, NOW(), NOW())
             RETURNING product_id AS id, name, description, image_url, category_id",
        )
        .bind(name)
        .bind(description)
        .bind(image_url)
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(
        &self,
        product_id: i32,
        name: Option<&str>,
        description: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let mut query = sqlx::QueryBuilder::new("UPDATE tbl_product SET ");
        let mut sets = query.separated(", ");
        if let Some(name) = name {
            sets.push("name = ").push_bind_unseparated(name);
        }
        if let Some(description) = description {
            sets.push("description = ").push_bind_unseparated(description);
        }
        if let Some(image_url) = image_url {
            sets.push("image_url = ").push_bind_unseparated(image_url);
        }
        sets.push("updated_at = NOW()");
        query
            .push(" WHERE product_id = ")
            .push_bind(product_id)
            .push(" AND deleted_at IS NULL");

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn soft_delete_with_variants(&self, product_id: i32) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query(
            "UPDATE tbl_product SET deleted_at = NOW()
             WHERE product_id = $1 AND deleted_at IS NULL",
        )
        .bind(product_id)
        .execute(&mut *tx)
        .await?;

        if product.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(0);
        }

        sqlx::query(
            "UPDATE tbl_variant SET deleted_at = NOW()
             WHERE product_id = $1 AND deleted_at IS NULL",
        )
        .bind(product_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(product.rows_affected())
    }

    async fn product_rows(&self, product_id: i32) -> Result<Vec<ProductVariantRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT
                 p.product_id, p.name AS product_name, p.description, p.image_url, p.category_id,
                 v.variant_id, v.name AS variant_name, v.max_retail_price, v.discount_price,
                 v.size, v.color
             FROM tbl_product p
             LEFT JOIN tbl_variant v
                 ON p.product_id = v.product_id AND v.deleted_at IS NULL
             WHERE p.product_id = $1 AND p.deleted_at IS NULL
             ORDER BY v.variant_id ASC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
    }
}
