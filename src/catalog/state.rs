//! State for the product catalog slice.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::slice::SliceState;

use super::product::Product;

/// Catalog state.
///
/// `featured` and `categories` are derived from the list passed to the last
/// `setProducts`; later sorts leave them as they were.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    pub items: Vec<Product>,
    pub featured: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_product: Option<Product>,
    pub categories: BTreeSet<String>,
}

impl SliceState for CatalogState {
    const NAME: &'static str = "products";
}

impl CatalogState {
    /// Check if no products are loaded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a product in `items` by id.
    pub fn product_by_id(&self, id: i64) -> Option<&Product> {
        self.items.iter().find(|product| product.id == id)
    }

    /// Products of `items` in the given category, in current order.
    pub fn products_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.items
            .iter()
            .filter(move |product| product.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, category: &str) -> Product {
        Product {
            id,
            name: format!("p{id}"),
            category: category.into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_by_default() {
        let state = CatalogState::default();
        assert!(state.is_empty());
        assert!(state.categories.is_empty());
        assert!(state.selected_product.is_none());
    }

    #[test]
    fn product_by_id_finds_item() {
        let state = CatalogState {
            items: vec![product(1, "a"), product(2, "b")],
            ..Default::default()
        };
        assert_eq!(state.product_by_id(2).map(|p| p.id), Some(2));
        assert!(state.product_by_id(3).is_none());
    }

    #[test]
    fn products_in_category_keeps_order() {
        let state = CatalogState {
            items: vec![product(3, "a"), product(1, "b"), product(2, "a")],
            ..Default::default()
        };
        let ids: Vec<i64> = state.products_in_category("a").map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
