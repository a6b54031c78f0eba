//! Intents for the product catalog slice.

use serde::{Deserialize, Serialize};

use crate::slice::Intent;

use super::product::Product;
use super::sort::SortOrder;

/// Intents that can be dispatched to the product catalog slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum CatalogIntent {
    /// Replace the product list; re-derives categories and featured products.
    SetProducts(Vec<Product>),

    SetSelectedProduct(Option<Product>),

    /// Replace the featured list without touching `items`.
    SetFeaturedProducts(Vec<Product>),

    SetLoading(bool),

    SetError(Option<String>),

    /// Reserved action name. Has no effect on state.
    FilterProducts(String),

    /// Reorder `items` in place.
    SortProducts(SortOrder),
}

impl CatalogIntent {
    /// Every action name this slice understands.
    pub const KINDS: &'static [&'static str] = &[
        "setProducts",
        "setSelectedProduct",
        "setFeaturedProducts",
        "setLoading",
        "setError",
        "filterProducts",
        "sortProducts",
    ];
}

impl Intent for CatalogIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::SetProducts(_) => "setProducts",
            Self::SetSelectedProduct(_) => "setSelectedProduct",
            Self::SetFeaturedProducts(_) => "setFeaturedProducts",
            Self::SetLoading(_) => "setLoading",
            Self::SetError(_) => "setError",
            Self::FilterProducts(_) => "filterProducts",
            Self::SortProducts(_) => "sortProducts",
        }
    }
}
