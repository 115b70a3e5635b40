use crate::database::models::variant::{
    CreateVariantRequest, NewVariant, UpdateVariantRequest, Variant, VariantChanges,
    VariantCreated,
};
use crate::database::variant_store::VariantStore;
use crate::error::{
    ApiError, INVALID_VARIANT_ID, NOTHING_TO_UPDATE_IN_VARIANT, NO_DATA_FOUND,
    PRODUCT_ID_NOT_EXIST, VARIANT_NOT_EXIST,
};

#[derive(Clone)]
pub struct VariantService<S> {
    store: S,
}

impl<S: VariantStore> VariantService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateVariantRequest) -> Result<VariantCreated, ApiError> {
        let product_id = match request.product_id {
            Some(product_id) if product_id > 0 => product_id,
            _ => {
                return Err(ApiError::Validation(
                    "product_id is required and must be greater than zero".into(),
                ))
            }
        };
        // A price of zero is legitimate; only an absent price is rejected.
        let max_retail_price = request
            .max_retail_price
            .ok_or_else(|| ApiError::Validation("max_retail_price is required".into()))?;

        if !self.store.product_exists(product_id).await? {
            return Err(ApiError::NotFound(PRODUCT_ID_NOT_EXIST.into()));
        }

        let new = NewVariant {
            name: request.name,
            max_retail_price,
            discount_price: request.discount_price,
            size: request.size,
            color: request.color,
            product_id,
        };
        Ok(self.store.insert(&new).await?)
    }

    /// Apply a partial update; returns the updated variant id.
    pub async fn update(&self, request: UpdateVariantRequest) -> Result<i32, ApiError> {
        let variant_id = request
            .variant_id
            .ok_or_else(|| ApiError::Validation("variant_id is required".into()))?;

        if !self.store.id_exists(variant_id).await? {
            return Err(ApiError::NotFound(INVALID_VARIANT_ID.into()));
        }

        let changes = VariantChanges {
            name: request.name,
            max_retail_price: request.max_retail_price,
            discount_price: request.discount_price,
            size: request.size,
            color: request.color,
        };
        if changes.is_empty() {
            return Err(ApiError::Precondition(NOTHING_TO_UPDATE_IN_VARIANT.into()));
        }

        let affected = self.store.update(variant_id, &changes).await?;
        if affected == 0 {
            return Err(ApiError::NotFound(INVALID_VARIANT_ID.into()));
        }
        Ok(variant_id)
    }

    pub async fn delete(&self, variant_id: i32) -> Result<(), ApiError> {
        if !self.store.id_exists(variant_id).await? {
            return Err(ApiError::NotFound(VARIANT_NOT_EXIST.into()));
        }

        let affected = self.store.soft_delete(variant_id).await?;
        if affected == 0 {
            return Err(ApiError::NotFound(INVALID_VARIANT_ID.into()));
        }
        Ok(())
    }

    /// A single variant of a product; absence is a not-found condition.
    pub async fn get(&self, product_id: i32, variant_id: i32) -> Result<Variant, ApiError> {
        if !self.store.product_exists(product_id).await? {
            return Err(ApiError::NotFound(PRODUCT_ID_NOT_EXIST.into()));
        }

        let variants = self.store.live_variants(product_id, Some(variant_id)).await?;
        variants
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(NO_DATA_FOUND.into()))
    }

    /// All live variants of a product. An empty list is a valid result.
    pub async fn list(&self, product_id: i32) -> Result<Vec<Variant>, ApiError> {
        if !self.store.product_exists(product_id).await? {
            return Err(ApiError::NotFound(PRODUCT_ID_NOT_EXIST.into()));
        }

        Ok(self.store.live_variants(product_id, None).await?)
    }
}
