use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Variant as it appears nested under a product and in variant lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Variant {
    pub variant_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub max_retail_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVariantRequest {
    pub name: Option<String>,
    pub max_retail_price: Option<f64>,
    pub discount_price: Option<f64>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub product_id: Option<i32>,
}

/// Validated insert payload handed to the store.
#[derive(Debug, Clone)]
pub struct NewVariant {
    pub name: Option<String>,
    pub max_retail_price: f64,
    pub discount_price: Option<f64>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub product_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVariantRequest {
    pub variant_id: Option<i32>,
    pub name: Option<String>,
    pub max_retail_price: Option<f64>,
    pub discount_price: Option<f64>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// The supplied-fields subset of an update. A `None` leaves the column
/// untouched; `Some` writes the value even when it is zero or empty.
#[derive(Debug, Clone, Default)]
pub struct VariantChanges {
    pub name: Option<String>,
    pub max_retail_price: Option<f64>,
    pub discount_price: Option<f64>,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl VariantChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.max_retail_price.is_none()
            && self.discount_price.is_none()
            && self.size.is_none()
            && self.color.is_none()
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VariantCreated {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub max_retail_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub product_id: i32,
}
