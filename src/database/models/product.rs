use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::variant::Variant;

/// One flattened LEFT JOIN row: a product paired with one of its variants,
/// or with no variant at all (every `v.*` column NULL).
#[derive(Debug, Clone, FromRow)]
pub struct ProductVariantRow {
    pub product_id: i32,
    pub product_name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: i32,
    pub variant_id: Option<i32>,
    pub variant_name: Option<String>,
    pub max_retail_price: Option<f64>,
    pub discount_price: Option<f64>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Product with its nested variants, as served by the listing and the
/// single-product fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub product_id: i32,
    #[serde(rename = "product_name")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category_id: i32,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Regroup flattened rows into unique products carrying their variants.
    ///
    /// Rows arrive sorted by product id then variant id, but grouping is by
    /// product-id equality via an id->slot index, so out-of-order or
    /// non-contiguous rows never produce duplicate products. A row with a
    /// NULL variant id contributes a product with zero variants.
    pub fn group_rows(rows: Vec<ProductVariantRow>) -> Vec<Product> {
        let mut products: Vec<Product> = Vec::new();
        let mut slots: HashMap<i32, usize> = HashMap::new();

        for row in rows {
            let slot = match slots.get(&row.product_id) {
                Some(&slot) => slot,
                None => {
                    slots.insert(row.product_id, products.len());
                    products.push(Product {
                        product_id: row.product_id,
                        name: row.product_name.clone(),
                        description: row.description.clone(),
                        image_url: row.image_url.clone(),
                        category_id: row.category_id,
                        variants: Vec::new(),
                    });
                    products.len() - 1
                }
            };

            if let Some(variant_id) = row.variant_id {
                products[slot].variants.push(Variant {
                    variant_id,
                    name: row.variant_name,
                    max_retail_price: row.max_retail_price.unwrap_or_default(),
                    discount_price: row.discount_price,
                    size: row.size,
                    color: row.color,
                });
            }
        }

        products
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequest {
    pub product_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductCreated {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product_id: i32, variant_id: Option<i32>) -> ProductVariantRow {
        ProductVariantRow {
            product_id,
            product_name: format!("product-{}", product_id),
            description: None,
            image_url: None,
            category_id: 1,
            variant_id,
            variant_name: variant_id.map(|v| format!("variant-{}", v)),
            max_retail_price: variant_id.map(|_| 100.0),
            discount_price: None,
            size: None,
            color: None,
        }
    }

    #[test]
    fn groups_variants_under_their_product() {
        let rows = vec![row(1, Some(11)), row(1, Some(12)), row(2, None)];
        let products = Product::group_rows(rows);

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product_id, 1);
        assert_eq!(
            products[0]
                .variants
                .iter()
                .map(|v| v.variant_id)
                .collect::<Vec<_>>(),
            vec![11, 12]
        );
        assert_eq!(products[1].product_id, 2);
        assert!(products[1].variants.is_empty());
    }

    #[test]
    fn null_variant_row_adds_no_placeholder() {
        let products = Product::group_rows(vec![row(7, None)]);
        assert_eq!(products.len(), 1);
        assert!(products[0].variants.is_empty());
    }

    #[test]
    fn non_contiguous_rows_do_not_duplicate_products() {
        let rows = vec![row(1, Some(11)), row(2, Some(21)), row(1, Some(12))];
        let products = Product::group_rows(rows);

        assert_eq!(
            products.iter().map(|p| p.product_id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            products[0]
                .variants
                .iter()
                .map(|v| v.variant_id)
                .collect::<Vec<_>>(),
            vec![11, 12]
        );
    }

    #[test]
    fn variant_fields_carry_through() {
        let mut with_fields = row(3, Some(31));
        with_fields.discount_price = Some(80.0);
        with_fields.size = Some("M".into());
        with_fields.color = Some("red".into());

        let products = Product::group_rows(vec![with_fields]);
        let variant = &products[0].variants[0];
        assert_eq!(variant.max_retail_price, 100.0);
        assert_eq!(variant.discount_price, Some(80.0));
        assert_eq!(variant.size.as_deref(), Some("M"));
        assert_eq!(variant.color.as_deref(), Some("red"));
    }
}
