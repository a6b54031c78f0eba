//! Reducer for the product catalog slice.

use std::collections::BTreeSet;

use crate::slice::Reducer;

use super::intent::CatalogIntent;
use super::state::CatalogState;

/// Reducer for catalog state transitions.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::SetProducts(items) => {
                let categories: BTreeSet<String> =
                    items.iter().map(|product| product.category.clone()).collect();
                let featured = items
                    .iter()
                    .filter(|product| product.is_featured())
                    .cloned()
                    .collect();

                CatalogState {
                    items,
                    featured,
                    categories,
                    ..state
                }
            }

            CatalogIntent::SetSelectedProduct(selected_product) => CatalogState {
                selected_product,
                ..state
            },

            CatalogIntent::SetFeaturedProducts(featured) => CatalogState { featured, ..state },

            CatalogIntent::SetLoading(loading) => CatalogState { loading, ..state },

            CatalogIntent::SetError(error) => CatalogState { error, ..state },

            CatalogIntent::FilterProducts(criterion) => {
                tracing::trace!(%criterion, "filterProducts has no effect");
                state
            }

            CatalogIntent::SortProducts(order) => {
                let mut items = state.items;
                if !order.sort(&mut items) {
                    tracing::debug!(mode = %order, "Ignoring unknown sort mode");
                }
                CatalogState { items, ..state }
            }
        }
    }
}
