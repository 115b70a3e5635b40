//! Assembly of the nested category forest served by `GET /category`.
//!
//! The store hands over a flat list of live categories and a map of the
//! products (with variants) owned by each category; this module rebuilds the
//! arbitrary-depth hierarchy from those flat inputs. The parent relation is
//! supposed to be acyclic, but nothing in the storage layer can guarantee it
//! under concurrent writes, so the build is guarded: it terminates on any
//! input shape and prunes branches it has already emitted.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::database::models::category::Category;
use crate::database::models::product::Product;

/// One node of the response forest. Built fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNode {
    pub category_id: i32,
    #[serde(rename = "category_name")]
    pub name: String,
    pub products: Vec<Product>,
    pub categories: Vec<CategoryNode>,
}

/// Build the category forest from flat category rows and per-category
/// products.
///
/// A category is a root when it has no parent, or when its parent id is not
/// among the fetched categories (an orphan surfaces as a root rather than
/// vanishing). Roots keep the order they had in `categories`; children keep
/// the order they were grouped in. Runs in O(categories + products).
pub fn build_catalog_tree(
    categories: &[Category],
    mut products_by_category: HashMap<i32, Vec<Product>>,
) -> Vec<CategoryNode> {
    let known: HashSet<i32> = categories.iter().map(|c| c.category_id).collect();

    let mut roots: Vec<i32> = Vec::new();
    let mut children: HashMap<i32, Vec<i32>> = HashMap::new();
    let mut names: HashMap<i32, &str> = HashMap::new();
    for category in categories {
        names.insert(category.category_id, category.name.as_str());
        match category.parent_category_id {
            Some(parent) if known.contains(&parent) => {
                children.entry(parent).or_default().push(category.category_id);
            }
            _ => roots.push(category.category_id),
        }
    }

    // One visited set for the whole build, not per root: a category that is
    // reachable twice (malformed data, or a cycle) is emitted at most once.
    let mut visited: HashSet<i32> = HashSet::new();

    let mut forest = Vec::with_capacity(roots.len());
    for root in roots {
        if let Some(node) = build_node(
            root,
            &children,
            &names,
            &mut products_by_category,
            &mut visited,
        ) {
            forest.push(node);
        }
    }
    forest
}

/// Recursively build one node. Returns `None` when the category was already
/// emitted in this build, which both breaks parent cycles and deduplicates
/// categories reachable through more than one parent.
fn build_node(
    category_id: i32,
    children: &HashMap<i32, Vec<i32>>,
    names: &HashMap<i32, &str>,
    products_by_category: &mut HashMap<i32, Vec<Product>>,
    visited: &mut HashSet<i32>,
) -> Option<CategoryNode> {
    if !visited.insert(category_id) {
        return None;
    }

    let mut node = CategoryNode {
        category_id,
        name: names
            .get(&category_id)
            .map(|name| name.to_string())
            .unwrap_or_default(),
        products: products_by_category
            .remove(&category_id)
            .unwrap_or_default(),
        categories: Vec::new(),
    };

    for &child in children.get(&category_id).into_iter().flatten() {
        if let Some(child_node) =
            build_node(child, children, names, products_by_category, visited)
        {
            node.categories.push(child_node);
        }
    }

    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category(id: i32, name: &str, parent: Option<i32>) -> Category {
        Category {
            category_id: id,
            name: name.to_string(),
            parent_category_id: parent,
        }
    }

    fn product(id: i32, name: &str, category_id: i32) -> Product {
        Product {
            product_id: id,
            name: name.to_string(),
            description: None,
            image_url: None,
            category_id,
            variants: Vec::new(),
        }
    }

    fn collect_ids(forest: &[CategoryNode], into: &mut Vec<i32>) {
        for node in forest {
            into.push(node.category_id);
            collect_ids(&node.categories, into);
        }
    }

    #[test]
    fn builds_three_level_hierarchy_with_products_at_each_level() {
        let categories = vec![
            category(1, "A", None),
            category(2, "B", Some(1)),
            category(3, "C", Some(2)),
        ];
        let mut products = HashMap::new();
        products.insert(1, vec![product(10, "on root", 1)]);
        products.insert(2, vec![product(20, "on child", 2)]);
        products.insert(3, vec![product(30, "on grandchild", 3)]);

        let forest = build_catalog_tree(&categories, products);

        assert_eq!(forest.len(), 1);
        let a = &forest[0];
        assert_eq!((a.category_id, a.name.as_str()), (1, "A"));
        assert_eq!(a.products[0].product_id, 10);
        let b = &a.categories[0];
        assert_eq!((b.category_id, b.name.as_str()), (2, "B"));
        assert_eq!(b.products[0].product_id, 20);
        let c = &b.categories[0];
        assert_eq!((c.category_id, c.name.as_str()), (3, "C"));
        assert_eq!(c.products[0].product_id, 30);
        assert!(c.categories.is_empty());
    }

    #[test]
    fn acyclic_forest_emits_every_category_exactly_once() {
        let categories = vec![
            category(1, "root one", None),
            category(2, "root two", None),
            category(3, "child", Some(1)),
            category(4, "child", Some(1)),
            category(5, "grandchild", Some(3)),
        ];

        let forest = build_catalog_tree(&categories, HashMap::new());

        let mut ids = Vec::new();
        collect_ids(&forest, &mut ids);
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        // roots keep input order
        assert_eq!(
            forest.iter().map(|n| n.category_id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn cyclic_parents_terminate_and_are_pruned() {
        let categories = vec![
            category(1, "A", Some(2)),
            category(2, "B", Some(1)),
            category(3, "sound", None),
        ];

        let forest = build_catalog_tree(&categories, HashMap::new());

        let mut ids = Vec::new();
        collect_ids(&forest, &mut ids);
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn self_parented_category_is_dropped() {
        let forest = build_catalog_tree(&[category(1, "loop", Some(1))], HashMap::new());
        assert!(forest.is_empty());
    }

    #[test]
    fn category_reachable_through_two_parents_is_emitted_once() {
        // Duplicate rows claiming different parents for id 3.
        let categories = vec![
            category(1, "A", None),
            category(2, "B", None),
            category(3, "C", Some(1)),
            category(3, "C", Some(2)),
        ];

        let forest = build_catalog_tree(&categories, HashMap::new());

        let mut ids = Vec::new();
        collect_ids(&forest, &mut ids);
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn orphaned_parent_reference_surfaces_as_root() {
        let categories = vec![category(2, "orphan", Some(99))];
        let forest = build_catalog_tree(&categories, HashMap::new());
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].category_id, 2);
    }

    #[test]
    fn missing_products_entry_serializes_as_empty_list() {
        let forest = build_catalog_tree(&[category(1, "bare", None)], HashMap::new());
        let value = serde_json::to_value(&forest).unwrap();
        assert_eq!(value[0]["products"], json!([]));
        assert_eq!(value[0]["categories"], json!([]));
    }

    #[test]
    fn identical_inputs_build_identical_forests() {
        let categories = vec![
            category(1, "A", None),
            category(2, "B", Some(1)),
            category(3, "C", None),
        ];
        let mut products = HashMap::new();
        products.insert(2, vec![product(20, "twice", 2)]);

        let first = build_catalog_tree(&categories, products.clone());
        let second = build_catalog_tree(&categories, products);
        assert_eq!(first, second);
    }

    #[test]
    fn shoes_fixture_matches_expected_wire_shape() {
        let categories = vec![category(1, "Shoes", None), category(2, "Sneakers", Some(1))];
        let mut products = HashMap::new();
        products.insert(1, vec![product(10, "Runner", 1)]);

        let forest = build_catalog_tree(&categories, products);
        let value = serde_json::to_value(&forest).unwrap();

        assert_eq!(
            value,
            json!([{
                "category_id": 1,
                "category_name": "Shoes",
                "products": [{
                    "product_id": 10,
                    "product_name": "Runner",
                    "category_id": 1,
                    "variants": []
                }],
                "categories": [{
                    "category_id": 2,
                    "category_name": "Sneakers",
                    "products": [],
                    "categories": []
                }]
            }])
        );
    }
}
