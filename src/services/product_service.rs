use crate::database::models::product::{
    CreateProductRequest, Product, ProductCreated, UpdateProductRequest,
};
use crate::database::product_store::ProductStore;
use crate::error::{
    ApiError, CATEGORY_NOT_EXISTS, INVALID_PRODUCT_ID, NOTHING_TO_UPDATE_IN_PRODUCT,
    PRODUCT_ID_NOT_EXIST, PRODUCT_NAME_EXISTS,
};

#[derive(Clone)]
pub struct ProductService<S> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateProductRequest) -> Result<ProductCreated, ApiError> {
        let name = match request.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ApiError::Validation("name is required".into())),
        };
        let category_id = match request.category_id {
            Some(category_id) if category_id > 0 => category_id,
            _ => {
                return Err(ApiError::Validation(
                    "category_id is required and must be greater than zero".into(),
                ))
            }
        };

        if !self.store.category_exists(category_id).await? {
            return Err(ApiError::NotFound(CATEGORY_NOT_EXISTS.into()));
        }
        if self.store.name_exists(name).await? {
            return Err(ApiError::Conflict(PRODUCT_NAME_EXISTS.into()));
        }

        Ok(self
            .store
            .insert(
                name,
                request.description.as_deref(),
                request.image_url.as_deref(),
                category_id,
            )
            .await?)
    }

    /// Apply a partial update; returns the updated product id.
    pub async fn update(&self, request: UpdateProductRequest) -> Result<i32, ApiError> {
        let product_id = request
            .product_id
            .ok_or_else(|| ApiError::Validation("product_id is required".into()))?;

        if !self.store.id_exists(product_id).await? {
            return Err(ApiError::NotFound(PRODUCT_ID_NOT_EXIST.into()));
        }
        if request.name.is_none() && request.description.is_none() && request.image_url.is_none()
        {
            return Err(ApiError::Precondition(NOTHING_TO_UPDATE_IN_PRODUCT.into()));
        }
        if let Some(name) = request.name.as_deref() {
            if name.is_empty() {
                return Err(ApiError::Validation("name must not be empty".into()));
            }
            if self.store.name_exists(name).await? {
                return Err(ApiError::Conflict(PRODUCT_NAME_EXISTS.into()));
            }
        }

        let affected = self
            .store
            .update(
                product_id,
                request.name.as_deref(),
                request.description.as_deref(),
                request.image_url.as_deref(),
            )
            .await?;
        if affected == 0 {
            return Err(ApiError::NotFound(INVALID_PRODUCT_ID.into()));
        }
        Ok(product_id)
    }

    /// Soft-delete the product together with all of its variants.
    pub async fn delete(&self, product_id: i32) -> Result<(), ApiError> {
        if !self.store.id_exists(product_id).await? {
            return Err(ApiError::NotFound(PRODUCT_ID_NOT_EXIST.into()));
        }

        let affected = self.store.soft_delete_with_variants(product_id).await?;
        if affected == 0 {
            return Err(ApiError::NotFound(PRODUCT_ID_NOT_EXIST.into()));
        }
        Ok(())
    }

    pub async fn get(&self, product_id: i32) -> Result<Product, ApiError> {
        if !self.store.id_exists(product_id).await? {
            return Err(ApiError::NotFound(PRODUCT_ID_NOT_EXIST.into()));
        }

        let rows = self.store.product_rows(product_id).await?;
        Product::group_rows(rows)
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(PRODUCT_ID_NOT_EXIST.into()))
    }
}
