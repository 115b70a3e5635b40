use std::collections::HashMap;

use crate::database::category_store::CategoryStore;
use crate::database::models::category::{
    CategoryCreated, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::database::models::product::Product;
use crate::error::{
    ApiError, CATEGORY_NAME_EXISTS, CATEGORY_NOT_EXISTS, INVALID_CATEGORY_ID,
    NOTHING_TO_UPDATE_IN_CATEGORY, PRODUCT_EXISTS_IN_CATEGORY, SUB_CATEGORY_EXISTS,
};

use super::catalog_tree::{build_catalog_tree, CategoryNode};

#[derive(Clone)]
pub struct CategoryService<S> {
    store: S,
}

impl<S: CategoryStore> CategoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<CategoryCreated, ApiError> {
        let name = match request.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ApiError::Validation("name is required".into())),
        };
        if matches!(request.parent_id, Some(parent_id) if parent_id <= 0) {
            return Err(ApiError::Validation(
                "parent_id must be greater than zero".into(),
            ));
        }

        if self.store.name_exists(name).await? {
            return Err(ApiError::Conflict(CATEGORY_NAME_EXISTS.into()));
        }

        Ok(self.store.insert(name, request.parent_id).await?)
    }

    /// Apply a partial update; returns the updated category id.
    pub async fn update(&self, request: UpdateCategoryRequest) -> Result<i32, ApiError> {
        let category_id = request
            .category_id
            .ok_or_else(|| ApiError::Validation("category_id is required".into()))?;

        if !self.store.id_exists(category_id).await? {
            return Err(ApiError::NotFound(INVALID_CATEGORY_ID.into()));
        }
        if request.name.is_none() && request.parent_id.is_none() {
            return Err(ApiError::Precondition(NOTHING_TO_UPDATE_IN_CATEGORY.into()));
        }
        if matches!(request.parent_id, Some(parent_id) if parent_id <= 0) {
            return Err(ApiError::Validation(
                "parent_id must be greater than zero".into(),
            ));
        }
        if let Some(name) = request.name.as_deref() {
            if name.is_empty() {
                return Err(ApiError::Validation("name must not be empty".into()));
            }
            if self.store.name_exists(name).await? {
                return Err(ApiError::Conflict(CATEGORY_NAME_EXISTS.into()));
            }
        }

        let affected = self
            .store
            .update(category_id, request.name.as_deref(), request.parent_id)
            .await?;
        if affected == 0 {
            return Err(ApiError::NotFound(INVALID_CATEGORY_ID.into()));
        }
        Ok(category_id)
    }

    pub async fn delete(&self, category_id: i32) -> Result<(), ApiError> {
        if !self.store.id_exists(category_id).await? {
            return Err(ApiError::NotFound(CATEGORY_NOT_EXISTS.into()));
        }
        if self.store.has_subcategories(category_id).await? {
            return Err(ApiError::Precondition(SUB_CATEGORY_EXISTS.into()));
        }
        if self.store.has_products(category_id).await? {
            return Err(ApiError::Precondition(PRODUCT_EXISTS_IN_CATEGORY.into()));
        }

        let affected = self.store.soft_delete(category_id).await?;
        if affected == 0 {
            return Err(ApiError::NotFound(CATEGORY_NOT_EXISTS.into()));
        }
        Ok(())
    }

    /// The full catalog: every live category with its products (and their
    /// variants) assembled into the nested forest.
    pub async fn list(&self) -> Result<Vec<CategoryNode>, ApiError> {
        let categories = self.store.live_categories().await?;
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i32> = categories.iter().map(|c| c.category_id).collect();
        let rows = self
            .store
            .product_rows_for_categories(&category_ids)
            .await?;

        let mut products_by_category: HashMap<i32, Vec<Product>> = HashMap::new();
        for product in Product::group_rows(rows) {
            products_by_category
                .entry(product.category_id)
                .or_default()
                .push(product);
        }

        Ok(build_catalog_tree(&categories, products_by_category))
    }
}
