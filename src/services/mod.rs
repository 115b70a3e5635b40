pub mod catalog_tree;
pub mod category_service;
pub mod product_service;
pub mod variant_service;
